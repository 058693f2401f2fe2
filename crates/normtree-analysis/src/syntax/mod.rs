//! Syntax model shared by front-end adapters and the normalization pipeline.

pub mod category;
pub mod raw;

pub use category::{Category, ExpressionShape, NodeClass, Punctuation};
pub use raw::{RawId, RawNode, RawTree, RawTreeBuilder};
