//! Top-level configuration model

use super::*;
use serde::{Deserialize, Serialize};

/// Complete crate configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Directory listing and refresh settings
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AuthzConfig {
    /// Merge configurations (other takes precedence where it differs from defaults)
    pub fn merge(mut self, other: Self) -> Self {
        self.directory = self.directory.merge(other.directory);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
