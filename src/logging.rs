//! Logging configuration for askdb.
//!
//! Logs go to stderr so they stay out of the way of the HTTP server's
//! stdout and are easy to capture in test output.

use tracing_subscriber::EnvFilter;

/// Initializes stderr logging with `RUST_LOG` support.
///
/// Defaults to `info` when no filter is set in the environment.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
