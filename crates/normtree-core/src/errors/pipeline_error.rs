//! Pipeline errors and non-fatal error collection.

use super::{ConfigError, ParseError};

/// Errors that can occur while processing a batch of source units.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Worker pool error: {0}")]
    ThreadPool(String),

    #[error("Pipeline cancelled")]
    Cancelled,
}

/// Result of a pipeline run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some units fail.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if any unit was skipped because of cancellation.
    pub fn was_cancelled(&self) -> bool {
        self.errors
            .iter()
            .any(|e| matches!(e, PipelineError::Cancelled))
    }
}
