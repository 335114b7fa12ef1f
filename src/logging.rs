//! Logging configuration for sqlquill.
//!
//! Logs go to stderr so generated SQL on stdout stays pipeable.

use tracing_subscriber::EnvFilter;

/// Initializes stderr logging.
///
/// The filter defaults to "info" and can be overridden with `RUST_LOG`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
