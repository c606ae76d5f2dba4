//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for AuthzConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating configuration sections");

        self.directory.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("Directory page_size must be greater than 0".to_string());
        }

        if self.max_page_size == 0 {
            return Err("Directory max_page_size must be greater than 0".to_string());
        }

        if self.page_size > self.max_page_size {
            return Err(format!(
                "Directory page_size ({}) cannot exceed max_page_size ({})",
                self.page_size, self.max_page_size
            ));
        }

        if self.refresh_interval_secs == 0 {
            return Err("Directory refresh_interval_secs must be greater than 0".to_string());
        }

        if self.refresh_interval_secs > 86400 {
            return Err("Directory refresh_interval_secs should not exceed one day".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Invalid log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
