//! Diagnostic logging on stderr.
//!
//! stdout carries only the report, so every tracing event goes to stderr.

use crate::types::LogLevel;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::default().add_directive(level.as_level_filter().into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(matches!(level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
