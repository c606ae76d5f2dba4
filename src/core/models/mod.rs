//! Core data models
//!
//! This module defines the records the directory works with: subjects,
//! offices, location requests, pages and the annotated view model.

pub mod location;
pub mod office;
pub mod page;
pub mod user;
pub mod view;

// Re-export commonly used types
pub use location::LocationRequest;
pub use office::Office;
pub use page::{Page, PageRequest};
pub use user::lifecycle::Lifecycle;
pub use user::types::{Action, NewSubject, Role, Subject, SubjectStatus};
pub use view::{PageInfo, SubjectView, ViewModel};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common metadata for all records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Creation timestamp
    #[serde(default = "chrono::Utc::now")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Version for optimistic locking
    #[serde(default = "default_version")]
    pub version: i64,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            version: default_version(),
        }
    }
}

impl Metadata {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timestamp and increment version
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}

fn default_version() -> i64 {
    1
}
