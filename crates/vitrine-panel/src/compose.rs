#![forbid(unsafe_code)]

//! The composition engine.
//!
//! Four passes, always in [`PassKind::SEQUENCE`] order, turn a flat ordered
//! list of leaves into the nested container tree. Each pass rebuilds the
//! list front to back into a fresh output sequence, keeping a lookup from
//! group name to the container already emitted in this scan: a leaf whose
//! directive names a group that exists merges into it (whatever side of it
//! the leaf was declared on); otherwise a new container is created in the
//! leaf's slot, inheriting the leaf's order.
//!
//! Before a node is processed at this level, the pass descends into its
//! child lists (and every tab), so directives on members that an earlier
//! pass already nested one level down are still honored.
//!
//! A directive is consumed when its leaf is absorbed. That single rule
//! makes composition idempotent: a tree already in final form has no
//! directives left to match, so re-running all four passes is a no-op.
//!
//! Termination: every node is visited exactly once per pass at its level,
//! and the descent depth is bounded by the number of directives a member
//! can carry.

use crate::directive::{Directive, PassKind};
use crate::foldout::FoldoutNode;
use crate::group::GroupNode;
use crate::node::Node;
use crate::notify::ChromeNotifier;
use crate::row::RowNode;
use crate::tabs::TabsNode;
use std::collections::HashMap;
use std::mem;

/// Run all four grouping passes over a flat node list.
pub(crate) fn compose(mut nodes: Vec<Node>, chrome: &ChromeNotifier) -> Vec<Node> {
    for kind in PassKind::SEQUENCE {
        nodes = run_pass(nodes, kind, chrome);
        tracing::trace!(pass = kind.as_str(), len = nodes.len(), "grouping pass done");
    }
    nodes
}

/// Apply one pass to one list, recursing into container children first.
fn run_pass(nodes: Vec<Node>, kind: PassKind, chrome: &ChromeNotifier) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    // Group name -> slot in `out` holding this pass's container of that name.
    let mut emitted: HashMap<String, usize> = HashMap::new();

    for mut node in nodes {
        descend(&mut node, kind, chrome);

        if let Some(directive) = node.take_directive(kind) {
            if let Some(&slot) = emitted.get(directive.group()) {
                absorb(&mut out[slot], node, &directive);
            } else {
                emitted.insert(directive.group().to_string(), out.len());
                out.push(new_container(&directive, node, chrome));
            }
        } else {
            // A container of this kind that is already in the list (a
            // previous composition, or a rebuild) collects later members
            // instead of letting a duplicate spawn.
            if let Some(key) = node.container_key(kind).map(str::to_string) {
                emitted.entry(key).or_insert(out.len());
            }
            out.push(node);
        }
    }
    out
}

/// Re-apply the pass inside every container's child lists.
fn descend(node: &mut Node, kind: PassKind, chrome: &ChromeNotifier) {
    match node {
        Node::Leaf(_) => {}
        Node::Group(group) => {
            group.children = run_pass(mem::take(&mut group.children), kind, chrome);
        }
        Node::Tabs(tabs) => {
            for tab in &mut tabs.tabs {
                tab.children = run_pass(mem::take(&mut tab.children), kind, chrome);
            }
        }
        Node::Foldout(foldout) => {
            foldout.children = run_pass(mem::take(&mut foldout.children), kind, chrome);
        }
        Node::Row(row) => {
            row.children = run_pass(mem::take(&mut row.children), kind, chrome);
        }
    }
}

/// Move `node` into an already-emitted container.
///
/// Ownership transfers; a leaf is never copied or dropped here.
fn absorb(container: &mut Node, node: Node, directive: &Directive) {
    match container {
        Node::Group(group) => group.children.push(node),
        Node::Foldout(foldout) => foldout.children.push(node),
        Node::Row(row) => row.children.push(node),
        Node::Tabs(tabs) => {
            let tab = match directive {
                Directive::Tab { tab, .. } => tab.as_str(),
                // The emitted map is keyed per pass kind, so a tabs
                // container only ever receives tab directives.
                _ => unreachable!("tabs container absorbed a non-tab directive"),
            };
            tabs.tab_children_mut(tab).push(node);
        }
        Node::Leaf(_) => unreachable!("emitted slots always hold containers"),
    }
}

/// Create the container for a directive's group, seeded with its first
/// member. The container takes that member's order and list slot.
fn new_container(directive: &Directive, node: Node, chrome: &ChromeNotifier) -> Node {
    let order = node.order();
    match directive {
        Directive::Box { group } => Node::Group(GroupNode::new(order, group.clone(), vec![node])),
        Directive::Tab { group, tab } => {
            let mut tabs = TabsNode::new(order, group.clone(), chrome.clone());
            tabs.tab_children_mut(tab).push(node);
            Node::Tabs(tabs)
        }
        Directive::Foldout { group, style } => {
            let mut foldout = FoldoutNode::new(order, group.clone(), *style, chrome.clone());
            foldout.children.push(node);
            Node::Foldout(foldout)
        }
        Directive::Row { group } => Node::Row(RowNode::new(order, group.clone(), vec![node])),
    }
}
