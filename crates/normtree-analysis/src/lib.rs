//! # normtree-analysis
//!
//! Turns concrete syntax trees into compact normalized trees for code-representation models.
//! Front-end adapters produce raw trees; the pipeline filters nodes, normalizes leaf tokens,
//! derives operator-aware types, and optionally compresses unary chains.

pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod resolve;
pub mod syntax;
pub mod tree;

pub use parsers::{JavaParser, LanguageParser, ParsedSource};
pub use pipeline::{build, build_with_resolver, compress, FileTree, SourceUnit, TreeBatch, TreeBuilder};
pub use resolve::{DeclaredTypeResolver, NoTypeResolver, TypeResolver};
pub use syntax::{Category, NodeClass, RawId, RawTree, RawTreeBuilder};
pub use tree::{NodeId, NormalizedNode, NormalizedTree};
