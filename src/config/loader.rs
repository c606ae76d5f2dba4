//! Configuration loading from the environment
//!
//! Recognized variables:
//! - `SAANVIKA_PAGE_SIZE`
//! - `SAANVIKA_MAX_PAGE_SIZE`
//! - `SAANVIKA_REFRESH_INTERVAL_SECS`
//! - `SAANVIKA_LOG_LEVEL`
//! - `SAANVIKA_LOG_FORMAT`

use super::models::*;
use crate::utils::error::{AuthzError, Result};
use std::str::FromStr;
use tracing::debug;

impl AuthzConfig {
    /// Build a configuration from a variable lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Some(page_size) = parse_var(&lookup, "SAANVIKA_PAGE_SIZE")? {
            config.directory.page_size = page_size;
        }
        if let Some(max_page_size) = parse_var(&lookup, "SAANVIKA_MAX_PAGE_SIZE")? {
            config.directory.max_page_size = max_page_size;
        }
        if let Some(interval) = parse_var(&lookup, "SAANVIKA_REFRESH_INTERVAL_SECS")? {
            config.directory.refresh_interval_secs = interval;
        }
        if let Some(level) = lookup("SAANVIKA_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = parse_var::<LogFormat, _>(&lookup, "SAANVIKA_LOG_FORMAT")? {
            config.logging.format = format;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AuthzError::config(format!("Invalid {}: {}", key, e))),
        None => Ok(None),
    }
}
