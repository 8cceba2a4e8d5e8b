#![forbid(unsafe_code)]

//! Panel themes.
//!
//! A [`PanelTheme`] names the styles the container chrome draws with. Hosts
//! configure appearance exclusively through a theme instance; nothing in the
//! panel tree reads global state.

use crate::Style;
use vitrine_render::cell::{PackedRgba, StyleFlags};

/// Named styles for panel chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTheme {
    /// Borders around group and tab content.
    pub border: Style,
    /// Container headers (group titles, expanded foldouts).
    pub header: Style,
    /// Collapsed foldout headers.
    pub header_collapsed: Style,
    /// The active tab label in a tab strip.
    pub tab_active: Style,
    /// Inactive tab labels in a tab strip.
    pub tab_inactive: Style,
    /// Leaf labels drawn by entities that want a themed default.
    pub label: Style,
}

impl PanelTheme {
    /// Monochrome default: bold headers, dim borders and inactive tabs.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            border: Style::new().attrs(StyleFlags::DIM),
            header: Style::new().attrs(StyleFlags::BOLD),
            header_collapsed: Style::new().attrs(StyleFlags::DIM),
            tab_active: Style::new().attrs(StyleFlags::BOLD | StyleFlags::UNDERLINE),
            tab_inactive: Style::new().attrs(StyleFlags::DIM),
            label: Style::new(),
        }
    }

    /// A light accent over the monochrome base.
    #[must_use]
    pub fn accented(accent: PackedRgba) -> Self {
        let mut theme = Self::monochrome();
        theme.header = theme.header.fg(accent);
        theme.tab_active = theme.tab_active.fg(accent);
        theme
    }
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self::monochrome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_monochrome() {
        assert_eq!(PanelTheme::default(), PanelTheme::monochrome());
    }

    #[test]
    fn accent_colors_header_and_active_tab() {
        let accent = PackedRgba::rgb(200, 120, 40);
        let theme = PanelTheme::accented(accent);
        assert_eq!(theme.header.fg, Some(accent));
        assert_eq!(theme.tab_active.fg, Some(accent));
        assert_eq!(theme.border, PanelTheme::monochrome().border);
    }
}
