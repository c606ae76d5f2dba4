//! Authorization engine facade

use super::permissions;
use super::roles;
use super::types::{PermissionCheck, RoleBearing};
use super::visibility;
use crate::core::models::{Action, Role, Subject, SubjectView, ViewModel};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// Role-hierarchy authorization engine
///
/// Holds no state. Every method is a pure function of its arguments, so a
/// single engine can be shared freely across tasks and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleAuthorizationEngine;

impl RoleAuthorizationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, role: Role) -> u8 {
        roles::rank(role)
    }

    pub fn is_visible(&self, requester: Role, subject: Role) -> bool {
        visibility::is_visible(requester, subject)
    }

    pub fn filter_visible<T, I>(&self, requester: Role, subjects: I) -> Vec<T>
    where
        T: RoleBearing,
        I: IntoIterator<Item = T>,
    {
        visibility::filter_visible(requester, subjects)
    }

    pub fn can_create(&self, requester: Role, candidate: Role) -> bool {
        roles::can_create(requester, candidate)
    }

    pub fn required_office_for_role(&self, role: Role) -> bool {
        roles::required_office_for_role(role)
    }

    pub fn creatable_roles(&self, requester: Role) -> Vec<Role> {
        roles::creatable_roles(requester)
    }

    pub fn authorized_actions(&self, requester: Role, subject: &Subject) -> BTreeSet<Action> {
        permissions::authorized_actions(requester, subject)
    }

    pub fn check_action(&self, requester: Role, subject: &Subject, action: Action) -> PermissionCheck {
        permissions::check_action(requester, subject, action)
    }

    pub fn authorize(&self, requester: Role, subject: &Subject, action: Action) -> Result<()> {
        permissions::authorize(requester, subject, action)
    }

    /// Build the view model for `requester` over `subjects`
    ///
    /// Keeps the visible subjects in their original order and attaches each
    /// one's authorized actions. Page information is left for the caller.
    pub fn annotate<I>(&self, requester: Role, subjects: I) -> ViewModel
    where
        I: IntoIterator<Item = Subject>,
    {
        let records = self
            .filter_visible(requester, subjects)
            .into_iter()
            .map(|subject| SubjectView {
                actions: self.authorized_actions(requester, &subject),
                subject,
            })
            .collect();

        ViewModel {
            requester,
            records,
            creatable_roles: self.creatable_roles(requester),
            page: None,
        }
    }
}
