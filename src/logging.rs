//! Diagnostic logging shared by both binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Choose the log filter.
///
/// `--debug` forces `benchenv=debug`. Otherwise `RUST_LOG` applies when set,
/// falling back to `benchenv=info`.
pub fn tracing_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("benchenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benchenv=info"))
    }
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout stays reserved for reports and JSON. Call
/// once, at the top of `main`.
pub fn init_tracing(debug: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(tracing_filter(debug))
        .init();
}
