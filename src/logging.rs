//! Logging setup for the command-line binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary so embedders keep control of their own output.

use tracing_subscriber::fmt;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive, e.g. `dirsankey=trace`.
pub const LOG_ENV: &str = "DIRSANKEY_LOG";

/// Filter directive used when `LOG_ENV` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive.trim())
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose))),
        _ => EnvFilter::new(default_directive(verbose)),
    }
}

/// Install a stderr subscriber. Progress lines go to stderr so `--json`
/// output on stdout stays machine-readable.
pub fn init_logging(verbose: bool, use_color: bool) {
    let layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(use_color)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(layer)
        .try_init();
}
