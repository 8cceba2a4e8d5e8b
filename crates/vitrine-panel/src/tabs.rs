#![forbid(unsafe_code)]

//! Tab group container: named tabs sharing one content area.
//!
//! Exactly one tab is active; inactive tabs contribute no height and are
//! not drawn, but they still own their children and keep every container
//! invariant. The active index is clamped on every query so a tab removed
//! by a rebuild can never index out of range.

use crate::chrome::{BORDER_CHROME, render_block};
use crate::node::{Node, mouse_stack, render_stack, stack_height};
use crate::notify::ChromeNotifier;
use crate::panel::PanelOptions;
use vitrine_core::event::MouseEvent;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;
use vitrine_render::drawing::{draw_str, text_width};

/// One named page of a tab group.
pub struct Tab {
    pub(crate) name: String,
    pub(crate) children: Vec<Node>,
}

impl Tab {
    pub(crate) fn new(name: String, children: Vec<Node>) -> Self {
        Self { name, children }
    }

    /// The tab's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tab's children, in render order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A tab group: a strip of named tabs over one bordered content area.
pub struct TabsNode {
    pub(crate) order: u32,
    pub(crate) name: String,
    pub(crate) tabs: Vec<Tab>,
    pub(crate) active: usize,
    pub(crate) chrome: ChromeNotifier,
}

/// Rows taken by the tab strip.
const STRIP_ROWS: u16 = 1;

impl TabsNode {
    pub(crate) fn new(order: u32, name: String, chrome: ChromeNotifier) -> Self {
        Self {
            order,
            name,
            tabs: Vec::new(),
            active: 0,
            chrome,
        }
    }

    /// The group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tabs, in creation order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The clamped active tab index, or `None` when there are no tabs.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            None
        } else {
            Some(self.active.min(self.tabs.len() - 1))
        }
    }

    /// Switch the active tab, raising chrome-changed when it actually moves.
    ///
    /// Out-of-range indices are ignored; the set of tabs only changes at
    /// rebuild time.
    pub fn set_active(&mut self, index: usize) {
        if index < self.tabs.len() && self.active_index() != Some(index) {
            self.active = index;
            self.chrome.notify();
        }
    }

    /// The child list of the named tab, creating the tab if needed.
    pub(crate) fn tab_children_mut(&mut self, tab_name: &str) -> &mut Vec<Node> {
        if let Some(i) = self.tabs.iter().position(|t| t.name == tab_name) {
            &mut self.tabs[i].children
        } else {
            self.tabs.push(Tab::new(tab_name.to_string(), Vec::new()));
            &mut self.tabs.last_mut().expect("just pushed").children
        }
    }

    fn content_width(width: u16) -> u16 {
        width.saturating_sub(BORDER_CHROME.horizontal_sum())
    }

    /// Per-tab label column spans within the strip, relative to its left
    /// edge. Rendering and click mapping both use this.
    fn strip_spans(&self) -> Vec<(usize, u16, u16)> {
        let mut spans = Vec::with_capacity(self.tabs.len());
        let mut x: u16 = 0;
        for (i, tab) in self.tabs.iter().enumerate() {
            let w = (text_width(&tab.name) as u16).saturating_add(2);
            spans.push((i, x, w));
            x = x.saturating_add(w);
        }
        spans
    }

    pub(crate) fn height(&self, width: u16, opts: &PanelOptions) -> u16 {
        let Some(active) = self.active_index() else {
            return 0;
        };
        let content = stack_height(&self.tabs[active].children, Self::content_width(width), opts);
        STRIP_ROWS
            .saturating_add(content)
            .saturating_add(BORDER_CHROME.vertical_sum())
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, opts: &PanelOptions) {
        let Some(active) = self.active_index() else {
            return;
        };

        let (strip, body) = area.split_top(STRIP_ROWS);
        for (i, x, _) in self.strip_spans() {
            let style = if i == active {
                opts.theme.tab_active
            } else {
                opts.theme.tab_inactive
            };
            let label_x = strip.x.saturating_add(x);
            let end = draw_str(buf, label_x, strip.y, " ", style.cell(' '), strip.right());
            let end = draw_str(buf, end, strip.y, &self.tabs[i].name, style.cell(' '), strip.right());
            draw_str(buf, end, strip.y, " ", style.cell(' '), strip.right());
        }

        let content = render_block(buf, body, opts.border, opts.theme.border, None);
        render_stack(&self.tabs[active].children, content, buf, opts);
    }

    pub(crate) fn handle_mouse(&mut self, area: Rect, ev: &MouseEvent, opts: &PanelOptions) {
        let Some(active) = self.active_index() else {
            return;
        };

        let (strip, body) = area.split_top(STRIP_ROWS);
        if strip.contains(ev.x, ev.y) {
            if ev.is_left_down() {
                let rel = ev.x - strip.x;
                if let Some(&(i, _, _)) = self
                    .strip_spans()
                    .iter()
                    .find(|&&(_, x, w)| rel >= x && rel < x.saturating_add(w))
                {
                    self.set_active(i);
                }
            }
            return;
        }

        let content = body.inner(BORDER_CHROME);
        mouse_stack(&mut self.tabs[active].children, content, ev, opts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveSet;
    use crate::entity::Label;
    use crate::node::LeafNode;
    use crate::notify::ChangeFlags;
    use std::rc::Rc;
    use vitrine_core::event::{MouseButton, MouseEventKind};

    fn leaf(order: u32, name: &str) -> Node {
        Node::Leaf(LeafNode::new(
            order,
            name.to_string(),
            DirectiveSet::new(),
            Box::new(Label::new(name, "v")),
        ))
    }

    fn tabs_node() -> (TabsNode, Rc<ChangeFlags>) {
        let flags = Rc::new(ChangeFlags::default());
        let mut node = TabsNode::new(0, "Stats".into(), ChromeNotifier::new(Rc::clone(&flags)));
        node.tab_children_mut("General").push(leaf(0, "hp"));
        node.tab_children_mut("Combat").push(leaf(1, "atk"));
        node.tab_children_mut("Combat").push(leaf(2, "def"));
        (node, flags)
    }

    #[test]
    fn tab_children_mut_creates_in_order() {
        let (node, _) = tabs_node();
        let names: Vec<_> = node.tabs().iter().map(Tab::name).collect();
        assert_eq!(names, ["General", "Combat"]);
    }

    #[test]
    fn height_counts_active_tab_only() {
        let (mut node, _) = tabs_node();
        let opts = PanelOptions::default();
        // strip + border + one child row
        assert_eq!(node.height(20, &opts), 4);
        node.set_active(1);
        assert_eq!(node.height(20, &opts), 5);
    }

    #[test]
    fn active_index_clamps() {
        let (mut node, _) = tabs_node();
        node.active = 99;
        assert_eq!(node.active_index(), Some(1));
        let opts = PanelOptions::default();
        // Height and render queries tolerate the stale index.
        assert_eq!(node.height(20, &opts), 5);
    }

    #[test]
    fn empty_tabs_render_nothing() {
        let flags = Rc::new(ChangeFlags::default());
        let node = TabsNode::new(0, "E".into(), ChromeNotifier::new(flags));
        let opts = PanelOptions::default();
        assert_eq!(node.active_index(), None);
        assert_eq!(node.height(20, &opts), 0);
        let mut buf = Buffer::new(6, 3);
        node.render(Rect::new(0, 0, 6, 3), &mut buf, &opts);
        assert_eq!(buf.row_string(0), "      ");
    }

    #[test]
    fn set_active_raises_chrome_changed_once_per_switch() {
        let (mut node, flags) = tabs_node();
        node.set_active(0);
        assert!(!flags.chrome_changed());
        node.set_active(1);
        assert!(flags.chrome_changed());
        flags.take();
        // Out of range is ignored.
        node.set_active(9);
        assert!(!flags.chrome_changed());
        assert_eq!(node.active_index(), Some(1));
    }

    #[test]
    fn strip_click_switches_tab() {
        let (mut node, flags) = tabs_node();
        let opts = PanelOptions::default();
        let area = Rect::new(2, 1, 24, 6);
        // "General" span is columns 0..9 relative; "Combat" starts at 9.
        let ev = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 2 + 10, 1);
        node.handle_mouse(area, &ev, &opts);
        assert_eq!(node.active_index(), Some(1));
        assert!(flags.chrome_changed());
    }

    #[test]
    fn renders_strip_and_active_content() {
        let (node, _) = tabs_node();
        let opts = PanelOptions::default();
        let mut buf = Buffer::new(20, 4);
        node.render(Rect::new(0, 0, 20, 4), &mut buf, &opts);
        assert_eq!(buf.row_string(0), " General  Combat    ");
        assert!(buf.row_string(2).contains("hp: v"));
    }
}
