#![forbid(unsafe_code)]

//! Container chrome: borders and header rows.
//!
//! All four container kinds draw through these helpers so their metrics
//! stay in one place: a bordered area always costs one cell per side, a
//! header always costs one row.

use vitrine_core::geometry::{Rect, Sides};
use vitrine_render::buffer::Buffer;
use vitrine_render::drawing::{draw_hline, draw_str, draw_vline};
use vitrine_style::{Style, set_style_area};

/// Border character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Square corners (default).
    #[default]
    Square,
    /// Rounded corners.
    Rounded,
    /// Double lines.
    Double,
    /// Plain ASCII.
    Ascii,
}

/// The six characters a border is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderType {
    /// The character set for this border type.
    #[must_use]
    pub const fn set(self) -> BorderSet {
        match self {
            BorderType::Square => BorderSet {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderType::Rounded => BorderSet {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            BorderType::Double => BorderSet {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            BorderType::Ascii => BorderSet {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
        }
    }
}

/// Rows and columns a full border consumes.
pub const BORDER_CHROME: Sides = Sides::all(1);

/// Marker prefixes for foldout headers.
pub const MARKER_EXPANDED: &str = "▾ ";
pub const MARKER_COLLAPSED: &str = "▸ ";

/// Draw a full border around `area`, optionally with a title on the top
/// edge, and return the content area inside it.
///
/// Areas smaller than 2x2 are left undrawn (nothing sensible fits) and the
/// returned content area is empty.
pub fn render_block(
    buf: &mut Buffer,
    area: Rect,
    border: BorderType,
    border_style: Style,
    title: Option<(&str, Style)>,
) -> Rect {
    if area.width < 2 || area.height < 2 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let set = border.set();
    let edge = |ch: char| border_style.cell(ch);

    draw_hline(buf, area.x, area.y, area.right(), edge(set.horizontal));
    draw_hline(buf, area.x, area.bottom() - 1, area.right(), edge(set.horizontal));
    draw_vline(buf, area.x, area.y, area.bottom(), edge(set.vertical));
    draw_vline(buf, area.right() - 1, area.y, area.bottom(), edge(set.vertical));
    buf.set(area.x, area.y, edge(set.top_left));
    buf.set(area.right() - 1, area.y, edge(set.top_right));
    buf.set(area.x, area.bottom() - 1, edge(set.bottom_left));
    buf.set(area.right() - 1, area.bottom() - 1, edge(set.bottom_right));

    if let Some((title, title_style)) = title {
        render_border_title(buf, area, title, title_style);
    }

    area.inner(BORDER_CHROME)
}

/// Draw `title` over the top border, clipped one cell in from each corner.
fn render_border_title(buf: &mut Buffer, area: Rect, title: &str, style: Style) {
    if area.width < 3 {
        return;
    }
    let x = area.x.saturating_add(1);
    let max_x = area.right().saturating_sub(1);
    draw_str(buf, x, area.y, title, style.cell(' '), max_x);
}

/// Draw a one-row header: `marker` then `title`, styled across the row.
///
/// `fill_row` styles the remainder of the row too (highlighted headers);
/// otherwise only the text cells are touched.
pub fn render_header(
    buf: &mut Buffer,
    area: Rect,
    marker: &str,
    title: &str,
    style: Style,
    fill_row: bool,
) {
    if area.is_empty() {
        return;
    }
    let row = Rect::new(area.x, area.y, area.width, 1);
    if fill_row {
        buf.fill(row, style.cell(' '));
        set_style_area(buf, row, style);
    }
    let template = style.cell(' ');
    let x = draw_str(buf, row.x, row.y, marker, template, row.right());
    draw_str(buf, x, row.y, title, template, row.right());
}
