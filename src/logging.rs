//! Logging setup
//!
//! Logs go to stderr so stdout only carries the export itself.

use tracing::trace;
use tracing_subscriber::EnvFilter;

/// Default filter for the given verbosity; `RUST_LOG` overrides it.
pub(crate) fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub(crate) fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    trace!("args: {:?}", std::env::args().collect::<Vec<_>>());
}
