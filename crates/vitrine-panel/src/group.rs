#![forbid(unsafe_code)]

//! Box group container: a bordered section with its name on the top edge.

use crate::chrome::{BORDER_CHROME, render_block};
use crate::node::{Node, mouse_stack, render_stack, stack_height};
use crate::panel::PanelOptions;
use vitrine_core::event::MouseEvent;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;

/// An always-expanded, bordered group of vertically stacked children.
pub struct GroupNode {
    pub(crate) order: u32,
    pub(crate) name: String,
    pub(crate) children: Vec<Node>,
}

impl GroupNode {
    pub(crate) fn new(order: u32, name: String, children: Vec<Node>) -> Self {
        Self {
            order,
            name,
            children,
        }
    }

    /// The group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group's children, in render order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn content_width(width: u16) -> u16 {
        width.saturating_sub(BORDER_CHROME.horizontal_sum())
    }

    pub(crate) fn height(&self, width: u16, opts: &PanelOptions) -> u16 {
        stack_height(&self.children, Self::content_width(width), opts)
            .saturating_add(BORDER_CHROME.vertical_sum())
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, opts: &PanelOptions) {
        let content = render_block(
            buf,
            area,
            opts.border,
            opts.theme.border,
            Some((&self.name, opts.theme.header)),
        );
        render_stack(&self.children, content, buf, opts);
    }

    pub(crate) fn handle_mouse(&mut self, area: Rect, ev: &MouseEvent, opts: &PanelOptions) {
        let content = area.inner(BORDER_CHROME);
        mouse_stack(&mut self.children, content, ev, opts);
    }
}
