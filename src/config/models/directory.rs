//! Directory configuration

use super::*;
use crate::core::models::PageRequest;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Employee directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Page size used when the caller does not pick one
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound on requested page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
    /// How often a refresher rebuilds its view, in seconds
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl DirectoryConfig {
    /// Merge directory configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.page_size != default_page_size() {
            self.page_size = other.page_size;
        }
        if other.max_page_size != default_max_page_size() {
            self.max_page_size = other.max_page_size;
        }
        if other.refresh_interval_secs != default_refresh_interval_secs() {
            self.refresh_interval_secs = other.refresh_interval_secs;
        }
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// First page at the configured default size
    pub fn first_page(&self) -> PageRequest {
        PageRequest::new(1, self.page_size)
    }
}
