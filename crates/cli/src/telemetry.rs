//! Tracing initialization for the binary.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Defaults to `info`; `RUST_LOG` overrides. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
