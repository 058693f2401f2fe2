//! Node filter: decides which raw children are dropped with their whole subtree.

use normtree_core::config::TreeConfig;

use crate::syntax::{NodeClass, RawId, RawTree};

/// Returns true when `node` matches any enabled drop predicate.
///
/// The eight predicates are evaluated independently and OR-ed, so asterisks inside a
/// kept documentation comment are still removed under `remove_asterisks`.
pub fn should_drop(tree: &RawTree, node: RawId, config: &TreeConfig) -> bool {
    let class = tree.category(node).class();

    let printable_symbol =
        config.remove_printable_symbols && matches!(class, NodeClass::Punctuation(_));
    let empty_list = config.remove_empty_lists
        && class == NodeClass::List
        && (tree.children(node).is_empty() || tree.text(node) == "()");
    let white_space = config.remove_white_spaces && class == NodeClass::Whitespace;
    let asterisks = config.remove_asterisks && class == NodeClass::DocAsterisks;
    let keyword = config.remove_keyword && class == NodeClass::Keyword;
    let operator = config.compress_operators && class == NodeClass::Operator;
    let comment = config.remove_comments && class == NodeClass::Comment;
    let java_doc = config.remove_java_doc && class == NodeClass::DocComment;

    printable_symbol
        || empty_list
        || white_space
        || asterisks
        || keyword
        || operator
        || comment
        || java_doc
}
