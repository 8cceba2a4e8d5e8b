#![forbid(unsafe_code)]

//! The member source contract.
//!
//! A member source is the host-side collaborator that knows how to turn an
//! underlying object into an ordered list of named, annotated members, and
//! how to commit edited values back. The panel never inspects the object
//! itself: all reads happen in [`MemberSource::scan`], all writes in
//! [`MemberSource::apply_changes`], and the root guarantees the two never
//! interleave within a frame.

use crate::directive::DirectiveSet;
use crate::entity::Entity;
use crate::error::MemberError;
use crate::notify::ValueNotifier;
use std::fmt;

/// Lazily produces the drawable leaf for one member.
///
/// The factory receives the panel's [`ValueNotifier`] at build time; an
/// editor entity keeps it and raises it when the user changes the value.
pub type EntityFactory = Box<dyn FnOnce(ValueNotifier) -> Result<Box<dyn Entity>, MemberError>>;

/// One member as declared by the source: name, stable order, grouping
/// directives, and the factory for its leaf entity.
pub struct MemberDecl {
    /// Member name, unique within the source.
    pub name: String,
    /// Position in the source's declaration order.
    pub order: u32,
    /// Grouping directives attached to the member.
    pub directives: DirectiveSet,
    /// Factory for the drawable leaf.
    pub factory: EntityFactory,
}

impl MemberDecl {
    /// Declare a member.
    pub fn new(
        name: impl Into<String>,
        order: u32,
        directives: DirectiveSet,
        factory: EntityFactory,
    ) -> Self {
        Self {
            name: name.into(),
            order,
            directives,
            factory,
        }
    }

    /// Declare a member that already failed at the source (for example a
    /// directive collision found while building its [`DirectiveSet`]).
    ///
    /// The panel drops it through the ordinary skip-and-log path.
    pub fn failed(name: impl Into<String>, order: u32, error: MemberError) -> Self {
        Self {
            name: name.into(),
            order,
            directives: DirectiveSet::new(),
            factory: Box::new(move |_| Err(error)),
        }
    }
}

impl fmt::Debug for MemberDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDecl")
            .field("name", &self.name)
            .field("order", &self.order)
            .field("directives", &self.directives)
            .finish_non_exhaustive()
    }
}

/// Supplier of the flat member list, and sink for committed edits.
pub trait MemberSource {
    /// Produce the members in declaration order.
    ///
    /// Called once per build or rebuild; the list's shape is assumed
    /// stable until the host rebuilds.
    fn scan(&mut self) -> Vec<MemberDecl>;

    /// Commit pending value edits to the underlying object.
    ///
    /// Called by the root at most once per frame, after the draw pass,
    /// and only when some leaf raised value-changed.
    fn apply_changes(&mut self);
}
