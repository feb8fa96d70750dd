//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so reports written to stdout stay machine readable.
//! `RUST_LOG` overrides the verbosity flag when set.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a base log level.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(format!("tonemap={}", level_for_verbosity(verbosity)))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
