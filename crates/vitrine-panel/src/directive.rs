#![forbid(unsafe_code)]

//! Grouping directives.
//!
//! A directive is a grouping instruction attached to a source member: put
//! this member into a named box group, into a named tab of a tab group,
//! under a foldout, or side by side in a row. A member carries at most one
//! directive per kind but may carry several kinds at once; the composition
//! passes consume them one kind at a time, in [`PassKind::SEQUENCE`] order,
//! which is what produces the box > tab > foldout > row nesting.

/// The four directive kinds, which double as the composition pass kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Box groups: bordered sections with a fixed header.
    Box,
    /// Tab groups: one active page out of several named tabs.
    Tab,
    /// Foldouts: collapsible sections.
    Foldout,
    /// Rows: children laid out side by side.
    Row,
}

impl PassKind {
    /// The strict pass order. Changing it changes final nesting depth, so
    /// it is part of the engine's contract, not an implementation detail.
    pub const SEQUENCE: [PassKind; 4] = [
        PassKind::Box,
        PassKind::Tab,
        PassKind::Foldout,
        PassKind::Row,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            PassKind::Box => 0,
            PassKind::Tab => 1,
            PassKind::Foldout => 2,
            PassKind::Row => 3,
        }
    }

    /// Human-readable kind name, used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PassKind::Box => "box",
            PassKind::Tab => "tab",
            PassKind::Foldout => "foldout",
            PassKind::Row => "row",
        }
    }
}

/// Presentation styles for foldout containers.
///
/// A style only changes chrome (header styling, whether the content area is
/// bordered); the collapse state machine and the height formula shape are
/// identical across styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FoldoutStyle {
    /// Plain marker + title header.
    #[default]
    Classic,
    /// Header row drawn with the header style across its full width.
    Highlighted,
    /// Plain header, bordered content area when expanded.
    BoxedHeader,
    /// Highlighted header and bordered content area.
    GroupedPanel,
}

/// A single grouping instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Put the member into the box group `group`.
    Box {
        group: String,
    },
    /// Put the member into tab `tab` of the tab group `group`.
    Tab {
        group: String,
        tab: String,
    },
    /// Put the member under the foldout `group`.
    Foldout {
        group: String,
        style: FoldoutStyle,
    },
    /// Lay the member out in the row `group`.
    Row {
        group: String,
    },
}

impl Directive {
    /// The pass kind this directive belongs to.
    #[must_use]
    pub const fn kind(&self) -> PassKind {
        match self {
            Directive::Box { .. } => PassKind::Box,
            Directive::Tab { .. } => PassKind::Tab,
            Directive::Foldout { .. } => PassKind::Foldout,
            Directive::Row { .. } => PassKind::Row,
        }
    }

    /// The group name the directive targets.
    #[must_use]
    pub fn group(&self) -> &str {
        match self {
            Directive::Box { group }
            | Directive::Tab { group, .. }
            | Directive::Foldout { group, .. }
            | Directive::Row { group } => group,
        }
    }
}

/// The directives attached to one member: at most one per kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveSet {
    slots: [Option<Directive>; 4],
}

impl DirectiveSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from directives, ignoring the one-per-kind rule check.
    ///
    /// Later directives of the same kind replace earlier ones; use
    /// [`insert`](Self::insert) when the collision matters.
    #[must_use]
    pub fn from_directives<I: IntoIterator<Item = Directive>>(directives: I) -> Self {
        let mut set = Self::new();
        for d in directives {
            let index = d.kind().index();
            set.slots[index] = Some(d);
        }
        set
    }

    /// Insert a directive.
    ///
    /// Returns the rejected directive when the member already carries one
    /// of the same kind; sources surface that as a construction error.
    pub fn insert(&mut self, directive: Directive) -> Result<(), Directive> {
        let slot = &mut self.slots[directive.kind().index()];
        if slot.is_some() {
            return Err(directive);
        }
        *slot = Some(directive);
        Ok(())
    }

    /// The directive of the given kind, if present.
    #[must_use]
    pub fn get(&self, kind: PassKind) -> Option<&Directive> {
        self.slots[kind.index()].as_ref()
    }

    /// Remove and return the directive of the given kind.
    ///
    /// Taking is what makes composition idempotent: a member already
    /// absorbed into its container has nothing left for a re-run to match.
    pub fn take(&mut self, kind: PassKind) -> Option<Directive> {
        self.slots[kind.index()].take()
    }

    /// Check if no directive is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
