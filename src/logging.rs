//! Diagnostic logging to stderr.
//!
//! Quiet by default so stderr only carries the final error message;
//! set `RUST_LOG=resume=debug` to trace the clock and the computed total.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resume=warn"));

    // a subscriber may already be installed (library callers, tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init();
}
