//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the normtree tracing/logging system.
///
/// Reads `NORMTREE_LOG` for per-module log levels, e.g.
/// `NORMTREE_LOG=normtree_analysis::pipeline=debug,normtree_analysis::parsers=warn`.
/// Falls back to `normtree=info` when unset or invalid.
///
/// Idempotent; later calls are no-ops. A subscriber installed by someone else is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("normtree=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
