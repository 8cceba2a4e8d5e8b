#![forbid(unsafe_code)]

//! Composable inspector panels.
//!
//! A host hands this crate a flat, ordered list of annotated members (via a
//! [`MemberSource`](source::MemberSource)) and gets back a [`Panel`]: a
//! nested tree of box groups, tab groups, foldouts, and horizontal rows,
//! built by the four-pass composition engine. The tree supports one
//! uniform layout protocol (a height query and a draw into a cell buffer)
//! plus mouse routing for toggling chrome.
//!
//! Per frame, the host asks the panel for its height, renders it, forwards
//! input, and calls [`Panel::finish_frame`], which commits any pending
//! value edits back to the source exactly once.

pub mod chrome;
mod compose;
pub mod directive;
pub mod entity;
pub mod error;
pub mod foldout;
pub mod group;
pub mod node;
pub mod notify;
pub mod panel;
pub mod row;
pub mod source;
pub mod tabs;

pub use chrome::BorderType;
pub use directive::{Directive, DirectiveSet, FoldoutStyle, PassKind};
pub use entity::{Entity, Label};
pub use error::{BuildIssue, MemberError};
pub use node::Node;
pub use notify::{FrameChanges, ValueNotifier};
pub use panel::{Panel, PanelOptions};
pub use source::{EntityFactory, MemberDecl, MemberSource};
