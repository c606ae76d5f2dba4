//! Authorization rule integration tests
//!
//! Exercises the public engine across every role and status combination.

#[cfg(test)]
mod tests {
    use crate::common::SubjectFactory;
    use saanvika_authz::auth::rbac::{actions_for, filter_visible, is_visible, rank};
    use saanvika_authz::{Action, Role, RoleAuthorizationEngine, SubjectStatus};
    use std::collections::BTreeSet;

    const STATUSES: [SubjectStatus; 3] = [
        SubjectStatus::Pending,
        SubjectStatus::Active,
        SubjectStatus::Inactive,
    ];

    fn set(actions: &[Action]) -> BTreeSet<Action> {
        actions.iter().copied().collect()
    }

    /// Every action offered on a subject must come with view
    #[test]
    fn test_actions_imply_view() {
        for requester in Role::KNOWN {
            for target in Role::KNOWN {
                for status in STATUSES {
                    let actions = actions_for(requester, target, status);
                    if !actions.is_empty() {
                        assert!(actions.contains(&Action::View));
                    }
                }
            }
        }
    }

    /// Mutating actions only appear on strict subordinates
    #[test]
    fn test_mutations_only_on_subordinates() {
        for requester in Role::KNOWN {
            for target in Role::KNOWN {
                for status in STATUSES {
                    let actions = actions_for(requester, target, status);
                    if rank(target) >= rank(requester) {
                        assert!(actions.len() <= 1, "{requester} on {target}: {actions:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_reference_decisions() {
        assert!(actions_for(Role::Admin, Role::Internal, SubjectStatus::Pending)
            .is_superset(&set(&[Action::View, Action::Verify])));
        assert!(actions_for(Role::Admin, Role::Internal, SubjectStatus::Active)
            .is_superset(&set(&[Action::View, Action::Suspend])));
        assert_eq!(
            actions_for(Role::Internal, Role::External, SubjectStatus::Active),
            set(&[Action::View, Action::Suspend, Action::RequestLocation])
        );
        assert_eq!(
            actions_for(Role::SuperAdmin, Role::SuperAdmin, SubjectStatus::Active),
            set(&[Action::View])
        );
    }

    #[test]
    fn test_filter_visible_reference_case() {
        assert_eq!(
            filter_visible(
                Role::Admin,
                [Role::Internal, Role::Admin, Role::SuperAdmin, Role::External]
            ),
            vec![Role::Internal, Role::External]
        );
    }

    #[test]
    fn test_unrecognized_role_strings_fail_closed() {
        let requester: Role = serde_json::from_str("\"regional_manager\"").unwrap();
        assert_eq!(requester, Role::Unknown);
        assert_eq!(rank(requester), 0);

        let engine = RoleAuthorizationEngine::new();
        let office = uuid::Uuid::new_v4();
        let subject = SubjectFactory::external(office);
        assert!(engine.authorized_actions(requester, &subject).is_empty());
        assert!(engine.creatable_roles(requester).is_empty());

        for role in Role::KNOWN {
            assert!(!is_visible(role, requester));
        }
    }

    #[test]
    fn test_role_strings_are_snake_case() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"super_admin\"");
        assert_eq!(
            serde_json::to_string(&Action::RequestLocation).unwrap(),
            "\"request_location\""
        );
        assert_eq!("super_admin".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_annotated_view_serializes_flat() {
        let engine = RoleAuthorizationEngine::new();
        let office = uuid::Uuid::new_v4();
        let subject = SubjectFactory::create(Role::Internal, SubjectStatus::Pending, Some(office));
        let view = engine.annotate(Role::Admin, vec![subject.clone()]);

        let json = serde_json::to_value(&view).unwrap();
        let record = &json["records"][0];
        assert_eq!(record["id"], subject.id().to_string());
        assert_eq!(record["role"], "internal");
        assert_eq!(record["status"], "pending");
        assert_eq!(record["actions"], serde_json::json!(["view", "verify", "delete"]));
        assert!(json.get("page").is_none());
    }
}
