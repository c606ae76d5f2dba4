//! Custom test assertions
//!
//! Domain-specific checks over directory view models.

use saanvika_authz::{Action, Role, RoleAuthorizationEngine, ViewModel};

/// Assertions for ViewModel
pub trait ViewModelAssertions {
    /// Assert every record is one the requester may see
    fn assert_only_visible(&self);

    /// Assert no record offers an action above the requester's authority
    fn assert_no_escalation(&self);
}

impl ViewModelAssertions for ViewModel {
    fn assert_only_visible(&self) {
        let engine = RoleAuthorizationEngine::new();
        for record in &self.records {
            assert!(
                engine.is_visible(self.requester, record.subject.role),
                "{} should not see a {} subject",
                self.requester,
                record.subject.role
            );
        }
    }

    fn assert_no_escalation(&self) {
        for record in &self.records {
            assert!(
                record.allows(Action::View),
                "Visible record without view action"
            );
            assert!(
                !record.allows(Action::CreateSubordinate),
                "create_subordinate is never a per-subject action"
            );
            if !self.requester.is_administrator() {
                assert!(
                    !record.allows(Action::Delete),
                    "{} must not be offered delete",
                    self.requester
                );
            }
            if self.requester == Role::External {
                assert!(
                    !record.allows(Action::RequestLocation),
                    "external requesters cannot request locations"
                );
            }
        }
    }
}

/// Assert a collection contains an item matching a predicate
#[macro_export]
macro_rules! assert_contains {
    ($collection:expr, $predicate:expr) => {
        assert!(
            $collection.iter().any($predicate),
            "Collection does not contain expected item"
        );
    };
}
