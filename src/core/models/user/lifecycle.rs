//! Subject lifecycle state machine
//!
//! ```text
//! pending --verify--> active --suspend--> inactive
//!                       ^                    |
//!                       +----unsuspend-------+
//! pending | active | inactive --delete--> (removed)
//! ```

use super::types::{Action, SubjectStatus};
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of applying a lifecycle action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "status", rename_all = "snake_case")]
pub enum Lifecycle {
    /// Subject continues to exist with this status
    Status(SubjectStatus),
    /// Subject was permanently removed
    Removed,
}

impl SubjectStatus {
    /// Apply a lifecycle action to this status
    ///
    /// Only the transitions in the module diagram are defined. Everything
    /// else, including any action on an `Unknown` status, is rejected.
    pub fn transition(self, action: Action) -> Result<Lifecycle> {
        use SubjectStatus::*;

        match (self, action) {
            (Pending, Action::Verify) => Ok(Lifecycle::Status(Active)),
            (Active, Action::Suspend) => Ok(Lifecycle::Status(Inactive)),
            (Inactive, Action::Unsuspend) => Ok(Lifecycle::Status(Active)),
            (Pending | Active | Inactive, Action::Delete) => Ok(Lifecycle::Removed),
            (from, action) => Err(AuthzError::InvalidTransition { from, action }),
        }
    }
}
