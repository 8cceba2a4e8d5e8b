#![forbid(unsafe_code)]

//! The root panel.
//!
//! [`Panel`] owns the composed tree and runs the frame protocol: the host
//! asks for the height, renders, forwards input, and calls
//! [`Panel::finish_frame`], which commits edited values back to the member
//! source at most once per frame, after the draw pass and never
//! mid-traversal.

use crate::chrome::BorderType;
use crate::compose::compose;
use crate::error::BuildIssue;
use crate::node::{LeafNode, Node, mouse_stack, render_stack, stack_height};
use crate::notify::{ChangeFlags, ChromeNotifier, FrameChanges, ValueNotifier};
use crate::source::MemberSource;
use std::rc::Rc;
use vitrine_core::event::Event;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;
use vitrine_style::PanelTheme;

/// Appearance and layout configuration, threaded through every height,
/// render, and input query.
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    /// Chrome styles.
    pub theme: PanelTheme,
    /// Border character set for bordered containers.
    pub border: BorderType,
    /// Blank rows between stacked siblings.
    pub spacing: u16,
}

/// The root of a composed panel tree.
pub struct Panel {
    nodes: Vec<Node>,
    flags: Rc<ChangeFlags>,
    issues: Vec<BuildIssue>,
    options: PanelOptions,
}

impl Panel {
    /// Scan the source and compose the tree.
    ///
    /// Members whose factory fails are dropped, logged, and recorded in
    /// [`issues`](Self::issues); the rest of the panel still builds.
    pub fn build(source: &mut dyn MemberSource, options: PanelOptions) -> Self {
        let flags = Rc::new(ChangeFlags::default());
        let (nodes, issues) = Self::scan_and_compose(source, &flags);
        Self {
            nodes,
            flags,
            issues,
            options,
        }
    }

    /// Rebuild the tree wholesale from the source's current shape.
    ///
    /// Chrome state lives in the tree, so a rebuild resets foldouts and
    /// active tabs to their defaults; the member source is the only place
    /// layout-shape state survives.
    pub fn rebuild(&mut self, source: &mut dyn MemberSource) {
        let (nodes, issues) = Self::scan_and_compose(source, &self.flags);
        self.nodes = nodes;
        self.issues = issues;
    }

    fn scan_and_compose(
        source: &mut dyn MemberSource,
        flags: &Rc<ChangeFlags>,
    ) -> (Vec<Node>, Vec<BuildIssue>) {
        let mut nodes = Vec::new();
        let mut issues = Vec::new();

        for decl in source.scan() {
            let notifier = ValueNotifier::new(Rc::clone(flags));
            match (decl.factory)(notifier) {
                Ok(entity) => {
                    nodes.push(Node::Leaf(LeafNode::new(
                        decl.order,
                        decl.name,
                        decl.directives,
                        entity,
                    )));
                }
                Err(error) => {
                    tracing::warn!(member = %decl.name, %error, "dropping member");
                    issues.push(BuildIssue {
                        member: decl.name,
                        error,
                    });
                }
            }
        }

        let leaf_count = nodes.len();
        let nodes = compose(nodes, &ChromeNotifier::new(Rc::clone(flags)));
        tracing::debug!(
            leaves = leaf_count,
            roots = nodes.len(),
            dropped = issues.len(),
            "panel composed"
        );
        (nodes, issues)
    }

    /// Total rows the visible tree needs at the given width.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        stack_height(&self.nodes, width, &self.options)
    }

    /// Draw the tree into `area`. Rendering never mutates structure.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_stack(&self.nodes, area, buf, &self.options);
    }

    /// Route one host event through the tree laid out in `area`.
    ///
    /// Mouse presses on container chrome toggle foldouts or switch tabs
    /// (raising chrome-changed); everything else is offered to the leaf
    /// under the cursor.
    pub fn handle_event(&mut self, area: Rect, event: &Event) {
        if let Event::Mouse(mouse) = event {
            mouse_stack(&mut self.nodes, area, mouse, &self.options);
        }
    }

    /// Whether any leaf raised value-changed this frame.
    #[must_use]
    pub fn has_value_changed(&self) -> bool {
        self.flags.value_changed()
    }

    /// Whether any container raised chrome-changed this frame.
    #[must_use]
    pub fn has_chrome_changed(&self) -> bool {
        self.flags.chrome_changed()
    }

    /// Close out the frame: commit edits (at most once, and only if a
    /// value changed), then reset and return the frame's flags.
    pub fn finish_frame(&mut self, source: &mut dyn MemberSource) -> FrameChanges {
        let changes = self.flags.take();
        if changes.value_changed {
            source.apply_changes();
        }
        changes
    }

    /// Members dropped during the last build or rebuild.
    #[must_use]
    pub fn issues(&self) -> &[BuildIssue] {
        &self.issues
    }

    /// The composed top-level nodes, in render order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Check if the panel has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A structural outline of the tree, one node per line.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.outline_into(0, &mut out);
        }
        out
    }

    /// Names of every leaf reachable from the root, depth first.
    #[must_use]
    pub fn leaf_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for node in &self.nodes {
            node.visit_leaves(&mut |e| names.push(e.name().to_string()));
        }
        names
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Mutable access to the options (theme or spacing changes take effect
    /// on the next height/render queries).
    pub fn options_mut(&mut self) -> &mut PanelOptions {
        &mut self.options
    }
}
