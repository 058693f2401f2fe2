//! Error handling for normtree.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use resolve_error::ResolveError;
