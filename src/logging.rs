//! Diagnostic logging on stderr.
//!
//! stdout carries the report, so every log line goes to stderr. `RUST_LOG`
//! takes precedence over the level chosen here.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used with `--verbose`.
pub const VERBOSE_LEVEL: &str = "debug";

/// Pick the filter directive for the given verbosity.
pub fn level_for(verbose: bool) -> &'static str {
    if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
