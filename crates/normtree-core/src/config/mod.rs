//! Configuration system for normtree.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod batch_config;
pub mod debug_config;
pub mod normtree_config;
pub mod tree_config;

pub use batch_config::BatchConfig;
pub use debug_config::DebugConfig;
pub use normtree_config::{CliOverrides, NormtreeConfig};
pub use tree_config::TreeConfig;
