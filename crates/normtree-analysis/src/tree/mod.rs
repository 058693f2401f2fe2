//! Normalized tree arena and its renderings.

pub mod display;
pub mod node;

pub use node::{NodeId, NormalizedNode, NormalizedTree};
