//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AuthzError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter
///
/// Precedence: `override_level`, then `RUST_LOG`, then the configured level.
pub fn build_filter(config: &LoggingConfig, override_level: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = override_level {
        return parse_level(level);
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_level(&config.level),
    }
}

fn parse_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| AuthzError::config(format!("Invalid log level '{}': {}", level, e)))
}

/// Install the global tracing subscriber
///
/// Events go to stderr so command output on stdout stays machine readable.
/// An `override_level` beats `RUST_LOG`; see [`build_filter`].
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, override_level: Option<&str>) -> Result<()> {
    let filter = build_filter(config, override_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| AuthzError::config(format!("Failed to initialize logging: {}", e)))
}
