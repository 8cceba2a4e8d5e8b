#![forbid(unsafe_code)]

//! The panel tree.
//!
//! [`Node`] is the closed set of tree shapes: a leaf entity or one of the
//! four container kinds. Every variant answers the same layout protocol
//! (order, name, visibility, height, render, mouse routing), so parents
//! treat children uniformly and the composition passes can match
//! exhaustively.
//!
//! Mouse routing re-runs the same arithmetic as rendering instead of
//! retaining per-node rectangles; the two code paths share the helpers at
//! the bottom of this module so they cannot drift apart.

use crate::directive::{Directive, DirectiveSet, PassKind};
use crate::entity::Entity;
use crate::foldout::FoldoutNode;
use crate::group::GroupNode;
use crate::panel::PanelOptions;
use crate::row::RowNode;
use crate::tabs::TabsNode;
use std::fmt;
use vitrine_core::event::MouseEvent;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;

/// One node of the panel tree.
pub enum Node {
    /// A drawable leaf produced by the member source.
    Leaf(LeafNode),
    /// A bordered, titled box group.
    Group(GroupNode),
    /// A tab group: one active page of several.
    Tabs(TabsNode),
    /// A collapsible foldout.
    Foldout(FoldoutNode),
    /// Children laid out side by side.
    Row(RowNode),
}

/// A leaf entity plus the bookkeeping the engine needs: its stable order,
/// its name, and whatever grouping directives remain unconsumed.
pub struct LeafNode {
    pub(crate) order: u32,
    pub(crate) name: String,
    pub(crate) directives: DirectiveSet,
    pub(crate) entity: Box<dyn Entity>,
}

impl LeafNode {
    pub(crate) fn new(
        order: u32,
        name: String,
        directives: DirectiveSet,
        entity: Box<dyn Entity>,
    ) -> Self {
        Self {
            order,
            name,
            directives,
            entity,
        }
    }
}

impl fmt::Debug for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafNode")
            .field("order", &self.order)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Node {
    /// The node's order index: a leaf's source order, or for containers the
    /// order of the first member absorbed into them.
    #[must_use]
    pub fn order(&self) -> u32 {
        match self {
            Node::Leaf(leaf) => leaf.order,
            Node::Group(group) => group.order,
            Node::Tabs(tabs) => tabs.order,
            Node::Foldout(foldout) => foldout.order,
            Node::Row(row) => row.order,
        }
    }

    /// The node's name: member name for leaves, group name for containers.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.name,
            Node::Group(group) => &group.name,
            Node::Tabs(tabs) => &tabs.name,
            Node::Foldout(foldout) => &foldout.name,
            Node::Row(row) => &row.name,
        }
    }

    /// Visibility aggregation: a leaf asks its entity, a container is
    /// visible iff any leaf it (recursively) contains is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.entity.is_visible(),
            Node::Group(group) => any_visible(&group.children),
            Node::Tabs(tabs) => tabs.tabs.iter().any(|t| any_visible(&t.children)),
            Node::Foldout(foldout) => any_visible(&foldout.children),
            Node::Row(row) => any_visible(&row.children),
        }
    }

    /// Rows this node needs at the given width. Invisible nodes cost zero.
    #[must_use]
    pub fn height(&self, width: u16, opts: &PanelOptions) -> u16 {
        if !self.is_visible() {
            return 0;
        }
        match self {
            Node::Leaf(leaf) => leaf.entity.height(width),
            Node::Group(group) => group.height(width, opts),
            Node::Tabs(tabs) => tabs.height(width, opts),
            Node::Foldout(foldout) => foldout.height(width, opts),
            Node::Row(row) => row.height(width, opts),
        }
    }

    /// Draw the node into `area`. Never mutates tree structure.
    pub fn render(&self, area: Rect, buf: &mut Buffer, opts: &PanelOptions) {
        if area.is_empty() || !self.is_visible() {
            return;
        }
        match self {
            Node::Leaf(leaf) => leaf.entity.render(area, buf),
            Node::Group(group) => group.render(area, buf, opts),
            Node::Tabs(tabs) => tabs.render(area, buf, opts),
            Node::Foldout(foldout) => foldout.render(area, buf, opts),
            Node::Row(row) => row.render(area, buf, opts),
        }
    }

    /// Route a mouse event that landed inside `area`.
    pub fn handle_mouse(&mut self, area: Rect, ev: &MouseEvent, opts: &PanelOptions) {
        if area.is_empty() || !self.is_visible() {
            return;
        }
        match self {
            Node::Leaf(leaf) => leaf.entity.handle_mouse(area, ev),
            Node::Group(group) => group.handle_mouse(area, ev, opts),
            Node::Tabs(tabs) => tabs.handle_mouse(area, ev, opts),
            Node::Foldout(foldout) => foldout.handle_mouse(area, ev, opts),
            Node::Row(row) => row.handle_mouse(area, ev, opts),
        }
    }

    /// Remove and return this pass's directive, if the node is a leaf that
    /// still carries one.
    pub(crate) fn take_directive(&mut self, kind: PassKind) -> Option<Directive> {
        match self {
            Node::Leaf(leaf) => leaf.directives.take(kind),
            _ => None,
        }
    }

    /// The node's group name when it is a container of the given kind.
    pub(crate) fn container_key(&self, kind: PassKind) -> Option<&str> {
        match (self, kind) {
            (Node::Group(group), PassKind::Box) => Some(&group.name),
            (Node::Tabs(tabs), PassKind::Tab) => Some(&tabs.name),
            (Node::Foldout(foldout), PassKind::Foldout) => Some(&foldout.name),
            (Node::Row(row), PassKind::Row) => Some(&row.name),
            _ => None,
        }
    }

    /// Append a structural outline of this subtree, one node per line.
    ///
    /// The outline is the tree's structural identity (kind, name, nesting,
    /// child order) and is what hosts print when debugging composition.
    pub fn outline_into(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf(leaf) => {
                out.push_str(&format!("{indent}- {}\n", leaf.name));
            }
            Node::Group(group) => {
                out.push_str(&format!("{indent}box {:?}\n", group.name));
                for child in &group.children {
                    child.outline_into(depth + 1, out);
                }
            }
            Node::Tabs(tabs) => {
                out.push_str(&format!("{indent}tabs {:?}\n", tabs.name));
                for tab in &tabs.tabs {
                    out.push_str(&format!("{indent}  tab {:?}\n", tab.name));
                    for child in &tab.children {
                        child.outline_into(depth + 2, out);
                    }
                }
            }
            Node::Foldout(foldout) => {
                out.push_str(&format!("{indent}foldout {:?}\n", foldout.name));
                for child in &foldout.children {
                    child.outline_into(depth + 1, out);
                }
            }
            Node::Row(row) => {
                out.push_str(&format!("{indent}row {:?}\n", row.name));
                for child in &row.children {
                    child.outline_into(depth + 1, out);
                }
            }
        }
    }

    /// Visit every leaf entity in depth-first order.
    pub fn visit_leaves<'a>(&'a self, visit: &mut dyn FnMut(&'a dyn Entity)) {
        match self {
            Node::Leaf(leaf) => visit(leaf.entity.as_ref()),
            Node::Group(group) => {
                for child in &group.children {
                    child.visit_leaves(visit);
                }
            }
            Node::Tabs(tabs) => {
                for tab in &tabs.tabs {
                    for child in &tab.children {
                        child.visit_leaves(visit);
                    }
                }
            }
            Node::Foldout(foldout) => {
                for child in &foldout.children {
                    child.visit_leaves(visit);
                }
            }
            Node::Row(row) => {
                for child in &row.children {
                    child.visit_leaves(visit);
                }
            }
        }
    }
}

/// Check if any node in the slice contains a visible leaf.
pub(crate) fn any_visible(children: &[Node]) -> bool {
    children.iter().any(Node::is_visible)
}

/// Total height of a vertical stack: visible children's heights plus
/// `opts.spacing` between consecutive visible children.
pub(crate) fn stack_height(children: &[Node], width: u16, opts: &PanelOptions) -> u16 {
    let mut total: u16 = 0;
    let mut first = true;
    for child in children {
        if !child.is_visible() {
            continue;
        }
        if !first {
            total = total.saturating_add(opts.spacing);
        }
        total = total.saturating_add(child.height(width, opts));
        first = false;
    }
    total
}

/// The rectangles a vertical stack assigns to its visible children.
///
/// Render and mouse routing both consume this, which is what keeps their
/// layout identical.
pub(crate) fn stack_slices(children: &[Node], area: Rect, opts: &PanelOptions) -> Vec<(usize, Rect)> {
    let mut slices = Vec::new();
    let mut y = area.y;
    let mut first = true;
    for (i, child) in children.iter().enumerate() {
        if !child.is_visible() {
            continue;
        }
        if !first {
            y = y.saturating_add(opts.spacing);
        }
        let h = child.height(area.width, opts);
        slices.push((i, Rect::new(area.x, y, area.width, h)));
        y = y.saturating_add(h);
        first = false;
    }
    slices
}

/// Render a vertical stack of children into `area`.
pub(crate) fn render_stack(children: &[Node], area: Rect, buf: &mut Buffer, opts: &PanelOptions) {
    buf.push_scissor(area);
    for (i, rect) in stack_slices(children, area, opts) {
        children[i].render(rect, buf, opts);
    }
    buf.pop_scissor();
}

/// Route a mouse event to whichever stacked child contains it.
pub(crate) fn mouse_stack(
    children: &mut [Node],
    area: Rect,
    ev: &MouseEvent,
    opts: &PanelOptions,
) {
    if !area.contains(ev.x, ev.y) {
        return;
    }
    for (i, rect) in stack_slices(children, area, opts) {
        if rect.contains(ev.x, ev.y) {
            children[i].handle_mouse(rect, ev, opts);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Label;
    use crate::panel::PanelOptions;

    fn leaf(order: u32, name: &str) -> Node {
        Node::Leaf(LeafNode::new(
            order,
            name.to_string(),
            DirectiveSet::new(),
            Box::new(Label::new(name, "v")),
        ))
    }

    fn hidden_leaf(order: u32, name: &str) -> Node {
        Node::Leaf(LeafNode::new(
            order,
            name.to_string(),
            DirectiveSet::new(),
            Box::new(Label::new(name, "v").visible(false)),
        ))
    }

    #[test]
    fn stack_height_skips_invisible() {
        let opts = PanelOptions::default();
        let children = vec![leaf(0, "a"), hidden_leaf(1, "b"), leaf(2, "c")];
        assert_eq!(stack_height(&children, 20, &opts), 2);
    }

    #[test]
    fn spacing_counts_between_visible_children_only() {
        let opts = PanelOptions {
            spacing: 1,
            ..PanelOptions::default()
        };
        let children = vec![leaf(0, "a"), hidden_leaf(1, "b"), leaf(2, "c")];
        // Two visible rows plus one gap.
        assert_eq!(stack_height(&children, 20, &opts), 3);
        let slices = stack_slices(&children, Rect::new(0, 0, 20, 10), &opts);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].1, Rect::new(0, 0, 20, 1));
        assert_eq!(slices[1].1, Rect::new(0, 2, 20, 1));
    }

    #[test]
    fn mouse_stack_targets_containing_slice() {
        let opts = PanelOptions::default();
        let mut children = vec![leaf(0, "a"), leaf(1, "b")];
        // No panics, event outside all slices is dropped.
        let ev = MouseEvent::new(
            vitrine_core::event::MouseEventKind::Moved,
            0,
            5,
        );
        mouse_stack(&mut children, Rect::new(0, 0, 20, 2), &ev, &opts);
    }

    #[test]
    fn visit_leaves_reaches_every_leaf() {
        let children = vec![leaf(0, "a"), leaf(1, "b")];
        let group = Node::Group(GroupNode::new(0, "G".to_string(), children));
        let mut names = Vec::new();
        group.visit_leaves(&mut |e| names.push(e.name().to_string()));
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn empty_container_is_invisible_and_zero_height() {
        let opts = PanelOptions::default();
        let group = Node::Group(GroupNode::new(0, "G".to_string(), Vec::new()));
        assert!(!group.is_visible());
        assert_eq!(group.height(20, &opts), 0);
    }
}
