//! Per-subject action authorization

use super::roles::rank;
use super::types::PermissionCheck;
use super::visibility::is_visible;
use crate::core::models::{Action, Role, Subject, SubjectStatus};
use crate::utils::error::{AuthzError, Result};
use std::collections::BTreeSet;

/// Actions `requester` may take on `subject`
///
/// Rules accumulate in a fixed order:
/// invisible subjects get nothing; visible ones get `view`; a subject that is
/// not strictly subordinate (the super admin override) stops at `view`;
/// otherwise the status decides between `verify`, `suspend` (plus
/// `request_location` for external staff) and `unsuspend`, and
/// administrators may additionally `delete`. An unrecognized status stops
/// at `view`.
pub fn authorized_actions(requester: Role, subject: &Subject) -> BTreeSet<Action> {
    actions_for(requester, subject.role, subject.status)
}

/// Same as [`authorized_actions`] on the raw decision inputs
pub fn actions_for(requester: Role, subject_role: Role, status: SubjectStatus) -> BTreeSet<Action> {
    let mut actions = BTreeSet::new();

    if !is_visible(requester, subject_role) {
        return actions;
    }
    actions.insert(Action::View);

    if rank(subject_role) >= rank(requester) {
        return actions;
    }

    match status {
        SubjectStatus::Pending => {
            actions.insert(Action::Verify);
        }
        SubjectStatus::Active => {
            actions.insert(Action::Suspend);
            if subject_role == Role::External && requester != Role::External {
                actions.insert(Action::RequestLocation);
            }
        }
        SubjectStatus::Inactive => {
            actions.insert(Action::Unsuspend);
        }
        // No transition is defined out of an unrecognized status
        SubjectStatus::Unknown => return actions,
    }

    if requester.is_administrator() {
        actions.insert(Action::Delete);
    }

    actions
}

/// Detailed check of one intended action
pub fn check_action(requester: Role, subject: &Subject, action: Action) -> PermissionCheck {
    if action == Action::CreateSubordinate {
        return PermissionCheck::denied(
            action,
            "create_subordinate is decided per candidate role, not per subject",
        );
    }

    let allowed = authorized_actions(requester, subject);
    if allowed.contains(&action) {
        return PermissionCheck::granted(action);
    }

    let reason = if allowed.is_empty() {
        format!("{} cannot see {} subjects", requester, subject.role)
    } else if !allowed.contains(&Action::Delete) && action == Action::Delete {
        format!("{} may not delete {} subjects", requester, subject.role)
    } else if allowed.len() == 1 {
        format!("{} has read-only access to {} subjects", requester, subject.role)
    } else {
        format!(
            "{} is not available for a {} subject in status {}",
            action, subject.role, subject.status
        )
    };

    PermissionCheck::denied(action, reason)
}

/// Fail with [`AuthzError::Forbidden`] unless the action is authorized
pub fn authorize(requester: Role, subject: &Subject, action: Action) -> Result<()> {
    let check = check_action(requester, subject, action);
    if check.granted {
        Ok(())
    } else {
        Err(AuthzError::forbidden(
            check
                .denial_reason
                .unwrap_or_else(|| format!("{} denied", action)),
        ))
    }
}
