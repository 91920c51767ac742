//! Diagnostic logging.
//!
//! Run summaries go to stdout through [`crate::output`]; this is the stderr
//! side: per-page events (`info`), skips and failures (`warn`), paths and
//! counts (`debug`). Verbosity comes from `-v` flags unless
//! `DIAGRAM_PAGES_LOG` is set, which takes precedence and accepts any
//! `tracing_subscriber::EnvFilter` directive.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "DIAGRAM_PAGES_LOG";

/// Maps a `-v` count to a tracing directive.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"`
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
