//! Error-tolerant parsing: count ERROR and MISSING nodes in a tree-sitter tree.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes under `root`. Only subtrees flagged by `has_error` are visited.
pub fn count_errors(root: Node) -> u32 {
    let mut count = 0u32;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    count
}
