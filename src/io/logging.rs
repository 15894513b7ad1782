//! Structured logging setup for the command-line tool
//!
//! Installs a global `tracing` subscriber writing to stderr. The level comes
//! from `RUST_LOG` (default `info`) and `MUTINFO_LOG_FORMAT=json` switches to
//! JSON lines.

use crate::io::configuration::LOG_FORMAT_ENV;
use crate::io::error::{Result, SynthesisError};
use std::env;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Human,
    /// One JSON object per event
    Json,
}

/// Parse a log format name, ignoring case and surrounding whitespace
///
/// # Errors
///
/// Returns an error for names other than `human` and `json`
pub fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(SynthesisError::Logging {
            reason: format!("unsupported log format '{other}'; expected 'human' or 'json'"),
        }),
    }
}

fn format_from_env() -> Result<LogFormat> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
        Err(err @ env::VarError::NotUnicode(_)) => Err(SynthesisError::Logging {
            reason: format!("{LOG_FORMAT_ENV}: {err}"),
        }),
    }
}

/// Install the global subscriber unless one was already installed
///
/// Repeated calls are no-ops. A subscriber installed elsewhere is kept.
///
/// # Errors
///
/// Returns an error if the format environment variable is invalid
pub fn init_logging() -> Result<()> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    // Another subscriber may already own the global slot; keep it
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    let _ = INITIALISED.set(());
    Ok(())
}
