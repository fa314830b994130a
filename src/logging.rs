//! Logging setup
//!
//! Logs go to stderr so they never mix with the habit list on stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with a default level.
///
/// `RUST_LOG` overrides `default_level` when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Default level for a run: `debug` when verbose, otherwise `warn`
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
