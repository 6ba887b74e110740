//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the sociocost tracing/logging system.
///
/// Reads the `SOCIOCOST_LOG` environment variable for per-module log levels.
/// Format: `SOCIOCOST_LOG=calculation=debug,distribution=trace`
///
/// Falls back to `sociocost=info` if `SOCIOCOST_LOG` is not set or invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SOCIOCOST_LOG")
            .unwrap_or_else(|_| EnvFilter::new("sociocost=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
