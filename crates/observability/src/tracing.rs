//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an interactive console process.
///
/// Log lines go to stderr so they never interleave with menu output on
/// stdout. Filtering is configurable via `RUST_LOG`; the default keeps
/// only warnings and above to stay quiet during normal use.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
