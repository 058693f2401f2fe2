//! Type resolution errors.
//!
//! These never abort a build: the builder turns them into an unknown type.

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Type resolution unavailable: {0}")]
    Unavailable(String),

    #[error("Node {node} is not part of the resolved tree")]
    UnknownNode { node: usize },
}
