//! Annotated view model handed to the presentation layer

use super::user::types::{Action, Role, Subject};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A visible subject together with what the requester may do to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectView {
    #[serde(flatten)]
    pub subject: Subject,
    pub actions: BTreeSet<Action>,
}

impl SubjectView {
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// Pagination details of the page a view model was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    /// Records in the store before visibility filtering, so it counts
    /// subjects the requester cannot see
    pub total: usize,
}

/// Everything the presentation layer needs to render a directory listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub requester: Role,
    pub records: Vec<SubjectView>,
    /// Roles the requester may create, ascending by rank
    pub creatable_roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
}

impl ViewModel {
    /// Whether the requester may create any subordinate at all
    pub fn can_create_subordinates(&self) -> bool {
        !self.creatable_roles.is_empty()
    }

    pub fn find(&self, id: uuid::Uuid) -> Option<&SubjectView> {
        self.records.iter().find(|view| view.subject.id() == id)
    }
}
