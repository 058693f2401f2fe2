//! Tree compressor: collapses unary chains into single nodes.
//!
//! Bottom-up, a node left with exactly one child `c` is replaced by a node labelled
//! `node|c` that takes `c`'s type, token and children. Applied to a whole chain
//! `A -> B -> C` this yields one node `A|B|C` carrying `C`'s data and children, so the
//! rewrite is computed top-down by following each chain to its first non-unary node.
//! The result has no node with exactly one child, and compressing it again is a no-op.

use normtree_core::constants::CHAIN_SEPARATOR;

use crate::tree::{NodeId, NormalizedNode, NormalizedTree};

/// Return a compressed copy of `tree`.
pub fn compress(tree: &NormalizedTree) -> NormalizedTree {
    let mut out = NormalizedTree::empty();
    if tree.is_empty() {
        return out;
    }

    let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(tree.root(), None)];
    while let Some((start, parent)) = stack.pop() {
        let mut end = start;
        while let [only] = tree.children(end) {
            end = *only;
        }

        let last = tree.node(end);
        let mut node = if end == start {
            NormalizedNode::new(
                last.type_label.clone(),
                last.resolved_type.clone(),
                last.printable_type.clone(),
                parent,
            )
        } else {
            NormalizedNode::new(chain_label(tree, start, end), last.resolved_type.clone(), None, parent)
        };
        node.token = last.token.clone();

        let current = out.push(node);
        if let Some(parent) = parent {
            out.node_mut(parent).children.push(current);
        }
        stack.extend(last.children().iter().rev().map(|&child| (child, Some(current))));
    }
    out
}

/// Display labels from `start` down to `end`, joined with `|`. Operator labels survive.
fn chain_label(tree: &NormalizedTree, start: NodeId, end: NodeId) -> String {
    let mut label = String::from(tree.node(start).display_label());
    let mut current = start;
    while current != end {
        current = tree.children(current)[0];
        label.push_str(CHAIN_SEPARATOR);
        label.push_str(tree.node(current).display_label());
    }
    label
}
