//! Diagnostic logging to stderr.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `tracing` directive syntax.
pub const LOG_ENV: &str = "QUIRE_LOG";

/// Installs the global subscriber.
///
/// `verbose` forces `debug`; otherwise `QUIRE_LOG` is used, falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
