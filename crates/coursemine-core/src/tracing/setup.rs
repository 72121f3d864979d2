//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the coursemine logging system.
///
/// Reads `COURSEMINE_LOG` for per-module log levels, e.g.
/// `COURSEMINE_LOG=coursemine_analysis::mining=debug,coursemine_analysis::loader=warn`.
///
/// Falls back to info for the coursemine crates if the variable is not set or is invalid.
/// Logs go to stderr so reports on stdout stay machine-readable.
///
/// Idempotent: only the first call installs the subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // try_init: a host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
