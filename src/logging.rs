//! Diagnostic logging on stderr
//!
//! Prompts and the success line go to stdout through the prompter; tracing
//! events stay on stderr so they never interleave with answers.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `kickstart=debug`
pub const LOG_ENV: &str = "KICKSTART_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
