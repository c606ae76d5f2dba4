//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

pub mod authz;
pub mod directory;
pub mod logging;

// Re-export all configuration types
pub use authz::*;
pub use directory::*;
pub use logging::*;

/// Default page size for directory listings
pub fn default_page_size() -> usize {
    20
}

/// Largest page size a caller may request
pub fn default_max_page_size() -> usize {
    100
}

/// Default directory refresh interval in seconds
pub fn default_refresh_interval_secs() -> u64 {
    60
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
