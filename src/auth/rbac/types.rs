//! RBAC type definitions

use crate::core::models::{Action, Role, Subject, SubjectView};
use serde::{Deserialize, Serialize};

/// Anything that carries an organizational role
///
/// Lets visibility filtering work on full records as well as on bare roles.
pub trait RoleBearing {
    fn role(&self) -> Role;
}

impl RoleBearing for Role {
    fn role(&self) -> Role {
        *self
    }
}

impl RoleBearing for Subject {
    fn role(&self) -> Role {
        self.role
    }
}

impl RoleBearing for SubjectView {
    fn role(&self) -> Role {
        self.subject.role
    }
}

impl<T: RoleBearing + ?Sized> RoleBearing for &T {
    fn role(&self) -> Role {
        (**self).role()
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Whether the action is granted
    pub granted: bool,
    /// Action that was checked
    pub action: Action,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(super) fn granted(action: Action) -> Self {
        Self {
            granted: true,
            action,
            denial_reason: None,
        }
    }

    pub(super) fn denied(action: Action, reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            action,
            denial_reason: Some(reason.into()),
        }
    }
}
