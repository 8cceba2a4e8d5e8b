#![forbid(unsafe_code)]

//! Row container: children laid out side by side.
//!
//! The available width is split evenly across visible children, leftover
//! columns going to the leftmost ones. Row height is the tallest visible
//! child, not a sum.

use crate::node::{Node, any_visible};
use crate::panel::PanelOptions;
use vitrine_core::event::MouseEvent;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;

/// A horizontal strip of children.
pub struct RowNode {
    pub(crate) order: u32,
    pub(crate) name: String,
    pub(crate) children: Vec<Node>,
}

impl RowNode {
    pub(crate) fn new(order: u32, name: String, children: Vec<Node>) -> Self {
        Self {
            order,
            name,
            children,
        }
    }

    /// The row's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The row's children, in render order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Column rectangles for the visible children within `area`.
    fn column_slices(&self, area: Rect, opts: &PanelOptions) -> Vec<(usize, Rect)> {
        let visible: Vec<usize> = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_visible())
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            return Vec::new();
        }

        let n = visible.len() as u16;
        let base = area.width / n;
        let remainder = area.width % n;
        let mut slices = Vec::with_capacity(visible.len());
        let mut x = area.x;
        for (slot, i) in visible.into_iter().enumerate() {
            let w = base + u16::from((slot as u16) < remainder);
            let h = self.children[i].height(w, opts).min(area.height);
            slices.push((i, Rect::new(x, area.y, w, h)));
            x = x.saturating_add(w);
        }
        slices
    }

    pub(crate) fn height(&self, width: u16, opts: &PanelOptions) -> u16 {
        let visible: Vec<&Node> = self.children.iter().filter(|c| c.is_visible()).collect();
        if visible.is_empty() {
            return 0;
        }
        let n = visible.len() as u16;
        let base = width / n;
        let remainder = width % n;
        visible
            .iter()
            .enumerate()
            .map(|(slot, c)| {
                let w = base + u16::from((slot as u16) < remainder);
                c.height(w, opts)
            })
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, opts: &PanelOptions) {
        if !any_visible(&self.children) {
            return;
        }
        buf.push_scissor(area);
        for (i, rect) in self.column_slices(area, opts) {
            self.children[i].render(rect, buf, opts);
        }
        buf.pop_scissor();
    }

    pub(crate) fn handle_mouse(&mut self, area: Rect, ev: &MouseEvent, opts: &PanelOptions) {
        for (i, rect) in self.column_slices(area, opts) {
            if rect.contains(ev.x, ev.y) {
                self.children[i].handle_mouse(rect, ev, opts);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveSet;
    use crate::entity::{Entity, Label};
    use crate::node::LeafNode;

    fn leaf(order: u32, name: &str) -> Node {
        Node::Leaf(LeafNode::new(
            order,
            name.to_string(),
            DirectiveSet::new(),
            Box::new(Label::new(name, "v")),
        ))
    }

    /// A leaf whose height depends on nothing but its fixed row count.
    #[derive(Debug)]
    struct TallLeaf {
        name: String,
        rows: u16,
    }

    impl Entity for TallLeaf {
        fn name(&self) -> &str {
            &self.name
        }

        fn height(&self, _width: u16) -> u16 {
            self.rows
        }

        fn render(&self, _area: Rect, _buf: &mut Buffer) {}
    }

    fn tall(order: u32, name: &str, rows: u16) -> Node {
        Node::Leaf(LeafNode::new(
            order,
            name.to_string(),
            DirectiveSet::new(),
            Box::new(TallLeaf {
                name: name.into(),
                rows,
            }),
        ))
    }

    #[test]
    fn height_is_max_not_sum() {
        let row = RowNode::new(0, "R".into(), vec![tall(0, "a", 2), tall(1, "b", 5)]);
        let opts = PanelOptions::default();
        assert_eq!(row.height(20, &opts), 5);
    }

    #[test]
    fn width_splits_evenly_with_remainder_left() {
        let row = RowNode::new(
            0,
            "R".into(),
            vec![leaf(0, "a"), leaf(1, "b"), leaf(2, "c")],
        );
        let opts = PanelOptions::default();
        let slices = row.column_slices(Rect::new(0, 0, 10, 1), &opts);
        let widths: Vec<u16> = slices.iter().map(|(_, r)| r.width).collect();
        assert_eq!(widths, [4, 3, 3]);
        assert_eq!(slices[1].1.x, 4);
        assert_eq!(slices[2].1.x, 7);
    }

    #[test]
    fn renders_side_by_side() {
        let row = RowNode::new(0, "R".into(), vec![leaf(0, "a"), leaf(1, "b")]);
        let opts = PanelOptions::default();
        let mut buf = Buffer::new(12, 1);
        row.render(Rect::new(0, 0, 12, 1), &mut buf, &opts);
        assert_eq!(buf.row_string(0), "a: v  b: v  ");
    }

    #[test]
    fn empty_row_is_zero_height() {
        let row = RowNode::new(0, "R".into(), Vec::new());
        let opts = PanelOptions::default();
        assert_eq!(row.height(20, &opts), 0);
    }
}
