#![forbid(unsafe_code)]

//! Styles and panel themes.

pub mod theme;

pub use theme::PanelTheme;

use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;
use vitrine_render::cell::{Cell, PackedRgba, StyleFlags};

/// A partial style: unset fields leave the target cell unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Check if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on top of `self`; `other`'s set fields win.
    #[must_use]
    pub fn merge(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }

    /// Apply the set fields to a cell.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs;
        }
    }

    /// A cell displaying `ch` with this style applied over the default cell.
    #[must_use]
    pub fn cell(&self, ch: char) -> Cell {
        let mut cell = Cell::from_char(ch);
        self.apply_to(&mut cell);
        cell
    }
}

/// Apply a style to every cell in a rectangular area, preserving content.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                style.apply_to(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_changes_nothing() {
        let mut cell = Cell::from_char('a');
        let before = cell;
        Style::new().apply_to(&mut cell);
        assert_eq!(cell, before);
        assert!(Style::new().is_empty());
    }

    #[test]
    fn style_sets_fields() {
        let style = Style::new()
            .fg(PackedRgba::BLACK)
            .bg(PackedRgba::WHITE)
            .attrs(StyleFlags::BOLD);
        let cell = style.cell('x');
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.fg, PackedRgba::BLACK);
        assert_eq!(cell.bg, PackedRgba::WHITE);
        assert_eq!(cell.attrs, StyleFlags::BOLD);
    }

    #[test]
    fn merge_prefers_other() {
        let base = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK);
        let over = Style::new().fg(PackedRgba::GRAY);
        let merged = base.merge(over);
        assert_eq!(merged.fg, Some(PackedRgba::GRAY));
        assert_eq!(merged.bg, Some(PackedRgba::BLACK));
    }

    #[test]
    fn set_style_area_preserves_content() {
        let mut buf = Buffer::new(4, 2);
        buf.set(1, 0, Cell::from_char('q'));
        set_style_area(&mut buf, Rect::new(0, 0, 4, 1), Style::new().fg(PackedRgba::GRAY));
        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.ch, 'q');
        assert_eq!(cell.fg, PackedRgba::GRAY);
        // Row outside the area is untouched.
        assert_eq!(buf.get(0, 1).unwrap().fg, PackedRgba::WHITE);
    }
}
