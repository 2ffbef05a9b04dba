// src/logging.rs
// =============================================================================
// Installs the tracing subscriber used by every command.
//
// Logs go to stderr so they never mix with the report on stdout (which may
// be JSON). RUST_LOG wins over the --verbose flag when it is set.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: a second call (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
