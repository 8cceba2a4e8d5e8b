#![forbid(unsafe_code)]

//! Foldout container: a collapsible section.
//!
//! Two states, collapsed and expanded, toggled by clicking the header row.
//! The presentation style picks the chrome (plain, highlighted header,
//! bordered content) but never the structure: every style has a one-row
//! header and the same height formula shape.

use crate::chrome::{BORDER_CHROME, MARKER_COLLAPSED, MARKER_EXPANDED, render_block, render_header};
use crate::directive::FoldoutStyle;
use crate::node::{Node, mouse_stack, render_stack, stack_height};
use crate::notify::ChromeNotifier;
use crate::panel::PanelOptions;
use vitrine_core::event::MouseEvent;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;

/// A collapsible group of vertically stacked children.
pub struct FoldoutNode {
    pub(crate) order: u32,
    pub(crate) name: String,
    pub(crate) style: FoldoutStyle,
    pub(crate) expanded: bool,
    pub(crate) children: Vec<Node>,
    pub(crate) chrome: ChromeNotifier,
}

/// Rows taken by the foldout header.
const HEADER_ROWS: u16 = 1;

impl FoldoutNode {
    pub(crate) fn new(
        order: u32,
        name: String,
        style: FoldoutStyle,
        chrome: ChromeNotifier,
    ) -> Self {
        Self {
            order,
            name,
            style,
            // Fully disclosed until the user collapses it.
            expanded: true,
            children: Vec::new(),
            chrome,
        }
    }

    /// The foldout's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The foldout's children, in render order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The presentation style.
    #[must_use]
    pub fn style(&self) -> FoldoutStyle {
        self.style
    }

    /// Whether the content is currently shown.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the collapse state and raise chrome-changed.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        self.chrome.notify();
    }

    fn bordered_content(&self) -> bool {
        matches!(
            self.style,
            FoldoutStyle::BoxedHeader | FoldoutStyle::GroupedPanel
        )
    }

    fn filled_header(&self) -> bool {
        matches!(
            self.style,
            FoldoutStyle::Highlighted | FoldoutStyle::GroupedPanel
        )
    }

    fn content_width(&self, width: u16) -> u16 {
        if self.bordered_content() {
            width.saturating_sub(BORDER_CHROME.horizontal_sum())
        } else {
            width
        }
    }

    pub(crate) fn height(&self, width: u16, opts: &PanelOptions) -> u16 {
        if !self.expanded {
            return HEADER_ROWS;
        }
        let content = stack_height(&self.children, self.content_width(width), opts);
        let chrome = if self.bordered_content() {
            BORDER_CHROME.vertical_sum()
        } else {
            0
        };
        HEADER_ROWS.saturating_add(content).saturating_add(chrome)
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, opts: &PanelOptions) {
        let (header, body) = area.split_top(HEADER_ROWS);
        let (marker, style) = if self.expanded {
            (MARKER_EXPANDED, opts.theme.header)
        } else {
            (MARKER_COLLAPSED, opts.theme.header_collapsed)
        };
        render_header(buf, header, marker, &self.name, style, self.filled_header());

        if !self.expanded {
            return;
        }
        if self.bordered_content() {
            let content = render_block(buf, body, opts.border, opts.theme.border, None);
            render_stack(&self.children, content, buf, opts);
        } else {
            render_stack(&self.children, body, buf, opts);
        }
    }

    pub(crate) fn handle_mouse(&mut self, area: Rect, ev: &MouseEvent, opts: &PanelOptions) {
        let (header, body) = area.split_top(HEADER_ROWS);
        if header.contains(ev.x, ev.y) {
            if ev.is_left_down() {
                self.toggle();
            }
            return;
        }
        if !self.expanded {
            return;
        }
        let content = if self.bordered_content() {
            body.inner(BORDER_CHROME)
        } else {
            body
        };
        mouse_stack(&mut self.children, content, ev, opts);
    }
}
