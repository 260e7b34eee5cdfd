//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the classifier tracing/logging system.
///
/// Reads the `SLC_LOG` environment variable for per-target log levels.
/// Format: `SLC_LOG=slc_engine=debug,slc_storage=warn`
///
/// Falls back to `info` for the workspace crates and `tower_http` if
/// `SLC_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
            EnvFilter::new("slc_core=info,slc_engine=info,slc_storage=info,slc_server=info,tower_http=info")
        });

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .init();
    });
}
