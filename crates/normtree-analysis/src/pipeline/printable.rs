//! Printable-type deriver: records a filtered operator on its expression.

use normtree_core::config::TreeConfig;
use normtree_core::constants::OPERATOR_SEPARATOR;

use crate::syntax::{NodeClass, RawId, RawTree};

/// `"<expression label>:<operator label>"` for binary, prefix, postfix and assignment
/// expressions when `compress_operators` is on; `None` otherwise.
pub fn derive_printable_type(tree: &RawTree, node: RawId, config: &TreeConfig) -> Option<String> {
    if !config.compress_operators {
        return None;
    }
    let category = tree.category(node);
    category.class().expression_shape()?;
    let operator = tree
        .children(node)
        .iter()
        .copied()
        .find(|&c| tree.category(c).class() == NodeClass::Operator)?;
    Some(format!(
        "{}{}{}",
        category.label(),
        OPERATOR_SEPARATOR,
        tree.category(operator).label()
    ))
}
