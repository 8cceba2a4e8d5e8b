#![forbid(unsafe_code)]

//! Construction errors.
//!
//! Nothing here is fatal: a member that fails to construct is dropped from
//! the tree, logged, and recorded as a [`BuildIssue`] for the host. The
//! worst outcome of any error in this crate is a missing panel region.

use crate::directive::PassKind;
use std::fmt;

/// Why one member could not be turned into a leaf entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// The member's entity factory failed.
    Factory {
        reason: String,
    },
    /// The member carried two directives of the same kind.
    ConflictingDirective {
        kind: PassKind,
        group: String,
    },
}

impl fmt::Display for MemberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberError::Factory { reason } => {
                write!(f, "entity factory failed: {reason}")
            }
            MemberError::ConflictingDirective { kind, group } => {
                write!(
                    f,
                    "member carries more than one {} directive (group {group:?})",
                    kind.as_str()
                )
            }
        }
    }
}

impl std::error::Error for MemberError {}

/// One member dropped during a build, surfaced to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIssue {
    /// The member's declared name.
    pub member: String,
    /// What went wrong.
    pub error: MemberError,
}

impl fmt::Display for BuildIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "member {:?} dropped: {}", self.member, self.error)
    }
}
