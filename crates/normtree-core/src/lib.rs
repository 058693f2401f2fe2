//! normtree-core: shared foundations for the normtree pipeline.
//!
//! - Config: TOML-based settings for tree normalization and batch runs
//! - Errors: one `thiserror` enum per subsystem, aggregated by `PipelineError`
//! - Tracing: `EnvFilter`-driven log setup
//! - Traits: cooperative cancellation
//! - Constants: defaults and token sentinels

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;

pub use config::{BatchConfig, CliOverrides, DebugConfig, NormtreeConfig, TreeConfig};
pub use errors::{ConfigError, ParseError, PipelineError, PipelineResult, ResolveError};
pub use traits::{Cancellable, CancellationToken};
