//! Batch run configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BATCH_SIZE;

/// Configuration for parallel batch runs over many source units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of units handed to the worker pool per chunk. Default: 1000.
    pub batch_size: usize,
    /// Worker thread count. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            threads: None,
        }
    }
}
