#![forbid(unsafe_code)]

//! Vitrine public facade crate.
//!
//! Vitrine composes inspector panels for terminals: a host implements
//! [`MemberSource`] to describe an object as a flat, ordered list of
//! annotated members, and gets back a [`Panel`]: a nested tree of box
//! groups, tab groups, foldouts, and rows that it sizes, renders, and
//! feeds input to once per frame.
//!
//! This crate re-exports the common types from the member crates and
//! offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use vitrine_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use vitrine_core::geometry::{Rect, Sides, Size};

// --- Render re-exports -----------------------------------------------------

pub use vitrine_render::buffer::Buffer;
pub use vitrine_render::cell::{Cell, PackedRgba, StyleFlags};

// --- Style re-exports ------------------------------------------------------

pub use vitrine_style::{PanelTheme, Style};

// --- Panel re-exports ------------------------------------------------------

pub use vitrine_panel::{
    BorderType, BuildIssue, Directive, DirectiveSet, Entity, EntityFactory, FoldoutStyle,
    FrameChanges, Label, MemberDecl, MemberError, MemberSource, Node, Panel, PanelOptions,
    PassKind, ValueNotifier,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Buffer, Directive, DirectiveSet, Entity, Event, FoldoutStyle, Label, MemberDecl,
        MemberSource, Panel, PanelOptions, PanelTheme, Rect, Style,
    };
}
