// src/logging.rs

//! Diagnostics for `unglue` using `tracing` + `tracing-subscriber`.
//!
//! Filter resolution:
//! 1. `--log-level` CLI flag applies one level to unglue itself
//! 2. otherwise `UNGLUE_LOG` is read as a full filter directive
//!    (e.g. `"debug"` or `"unglue=trace,reqwest=debug"`)
//! 3. otherwise `info`
//!
//! The HTTP stack is capped at `warn` unless a directive names it. Output
//! goes to STDERR; the timestamped status lines are printed on STDOUT by
//! [`crate::report::ConsoleReporter`].

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "UNGLUE_LOG";

/// Directives appended so transport internals stay quiet by default.
const QUIET_TRANSPORT: &str = "hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let directive = match cli_level {
        Some(lvl) => level_from_log_level(lvl).to_string().to_lowercase(),
        None => std::env::var(LOG_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string()),
    };

    let filter = build_filter(&directive)?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Build the filter for `directive`, capping transport crates unless the
/// directive mentions them itself.
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    let directive = directive.trim();
    let full = if ["hyper", "reqwest", "rustls"]
        .iter()
        .any(|krate| directive.contains(krate))
    {
        directive.to_string()
    } else {
        format!("{directive},{QUIET_TRANSPORT}")
    };
    EnvFilter::try_new(&full).with_context(|| format!("invalid {LOG_ENV} directive: {directive}"))
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}
