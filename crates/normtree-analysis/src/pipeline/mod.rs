//! Normalization pipeline: filter, printable types, builder, compressor, batch runner.

pub mod batch;
pub mod builder;
pub mod compressor;
pub mod filter;
pub mod printable;

pub use batch::{FileTree, SourceUnit, TreeBatch};
pub use builder::{build, build_with_resolver, TreeBuilder};
pub use compressor::compress;
pub use filter::should_drop;
pub use printable::derive_printable_type;
