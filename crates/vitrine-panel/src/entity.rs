#![forbid(unsafe_code)]

//! Leaf entities.
//!
//! A leaf is whatever the host's member source produces for one member: a
//! value display, an editor, a preview. The tree only needs the uniform
//! protocol below; ordering and grouping are the engine's concern and stay
//! out of the trait.

use vitrine_core::event::MouseEvent;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;
use vitrine_render::drawing::draw_str;
use vitrine_style::Style;

/// A drawable leaf in the panel tree.
pub trait Entity: core::fmt::Debug {
    /// The member name this entity displays.
    fn name(&self) -> &str;

    /// Whether the entity currently wants to be shown.
    ///
    /// Invisible entities contribute zero height and are skipped during
    /// rendering; containers aggregate this (a container is visible iff
    /// any contained leaf is).
    fn is_visible(&self) -> bool {
        true
    }

    /// Rows needed to render at the given width.
    fn height(&self, width: u16) -> u16;

    /// Draw into `area`. The buffer clips writes outside it.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Mouse input that landed inside this entity's rendered area.
    ///
    /// An editor entity mutates its pending value here and raises its
    /// [`ValueNotifier`](crate::notify::ValueNotifier).
    fn handle_mouse(&mut self, area: Rect, ev: &MouseEvent) {
        let _ = (area, ev);
    }
}

/// A one-row read-only `name: value` leaf.
///
/// The built-in placeholder entity: enough for panels whose members have no
/// custom drawer, and the workhorse of this crate's own tests.
#[derive(Debug, Clone)]
pub struct Label {
    name: String,
    value: String,
    style: Style,
    visible: bool,
}

impl Label {
    /// Create a label.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            style: Style::new(),
            visible: true,
        }
    }

    /// Set the text style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set initial visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Replace the displayed value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Entity for Label {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn height(&self, _width: u16) -> u16 {
        1
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let template = self.style.cell(' ');
        let x = draw_str(buf, area.x, area.y, &self.name, template, area.right());
        let x = draw_str(buf, x, area.y, ": ", template, area.right());
        draw_str(buf, x, area.y, &self.value, template, area.right());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_renders_name_and_value() {
        let label = Label::new("speed", "12");
        let mut buf = Buffer::new(12, 1);
        label.render(Rect::new(0, 0, 12, 1), &mut buf);
        assert_eq!(buf.row_string(0), "speed: 12   ");
    }

    #[test]
    fn label_clips_to_area() {
        let label = Label::new("name", "long value");
        let mut buf = Buffer::new(12, 1);
        label.render(Rect::new(0, 0, 6, 1), &mut buf);
        assert_eq!(buf.row_string(0), "name:       ");
    }

    #[test]
    fn label_height_is_one_row() {
        assert_eq!(Label::new("a", "b").height(80), 1);
    }

    #[test]
    fn hidden_label_reports_invisible() {
        assert!(!Label::new("a", "b").visible(false).is_visible());
    }
}
