#![forbid(unsafe_code)]

//! Cell buffer and drawing helpers.
//!
//! A [`Buffer`](buffer::Buffer) is a 2D grid of [`Cell`](cell::Cell)s the
//! panel tree renders into; the host decides how (and whether) to present
//! it. The `drawing` module holds the grapheme-aware text and fill helpers
//! shared by panel chrome and leaf entities.

pub mod buffer;
pub mod cell;
pub mod drawing;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
