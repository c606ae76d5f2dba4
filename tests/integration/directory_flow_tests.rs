//! Directory flow integration tests
//!
//! Walks subjects through creation and their lifecycle the way the
//! administration console does.

#[cfg(test)]
mod tests {
    use crate::common::{SubjectFactory, TestDirectory, ViewModelAssertions};
    use crate::{assert_contains, assert_err, assert_ok};
    use saanvika_authz::config::DirectoryConfig;
    use saanvika_authz::{
        Action, ActionOutcome, AuthzError, InMemoryRecordStore, Lifecycle, PageRequest, Role,
        StoreFixture, SubjectStatus,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_onboarding_lifecycle() {
        let dir = TestDirectory::new();

        let agent = assert_ok!(
            dir.directory
                .create(Role::Internal, SubjectFactory::request(Role::External, dir.office.id))
                .await
        );
        assert_eq!(agent.status, SubjectStatus::Pending);

        let outcome = assert_ok!(
            dir.directory
                .perform(Role::Internal, agent.id(), Action::Verify)
                .await
        );
        assert_eq!(
            outcome,
            ActionOutcome::Transitioned {
                lifecycle: Lifecycle::Status(SubjectStatus::Active)
            }
        );

        assert_ok!(
            dir.directory
                .perform(Role::Internal, agent.id(), Action::RequestLocation)
                .await
        );
        assert_ok!(
            dir.directory
                .perform(Role::Internal, agent.id(), Action::Suspend)
                .await
        );

        let view = assert_ok!(
            dir.directory
                .view_page(Role::Internal, PageRequest::new(1, 20))
                .await
        );
        let record = view.find(agent.id()).unwrap();
        assert_eq!(record.subject.status, SubjectStatus::Inactive);
        assert!(record.allows(Action::Unsuspend));
        assert!(!record.allows(Action::Delete));

        // Internal staff cannot delete; an admin can
        let err = assert_err!(
            dir.directory
                .perform(Role::Internal, agent.id(), Action::Delete)
                .await
        );
        assert!(err.is_denial());

        assert_ok!(
            dir.directory
                .perform(Role::Admin, agent.id(), Action::Delete)
                .await
        );
        assert!(dir.store.is_empty());
    }

    #[tokio::test]
    async fn test_views_never_leak_across_ranks() {
        let dir = TestDirectory::new();
        dir.insert(SubjectFactory::external(dir.office.id));
        dir.insert(SubjectFactory::internal(dir.office.id));
        dir.insert(SubjectFactory::admin());
        dir.insert(SubjectFactory::super_admin());

        let expected = [
            (Role::External, 0),
            (Role::Internal, 1),
            (Role::Admin, 2),
            (Role::SuperAdmin, 4),
        ];

        for (requester, visible) in expected {
            let view = assert_ok!(
                dir.directory
                    .view_page(requester, PageRequest::new(1, 20))
                    .await
            );
            view.assert_only_visible();
            view.assert_no_escalation();
            assert_eq!(view.records.len(), visible, "{requester}");
            assert_eq!(view.page.unwrap().total, 4);
        }
    }

    #[tokio::test]
    async fn test_paging_respects_configured_maximum() {
        let dir = TestDirectory::with_config(DirectoryConfig {
            page_size: 2,
            max_page_size: 3,
            refresh_interval_secs: 60,
        });
        for _ in 0..7 {
            dir.insert(SubjectFactory::external(dir.office.id));
        }

        let view = assert_ok!(
            dir.directory
                .view_page(Role::Admin, PageRequest::new(3, 50))
                .await
        );
        let page = view.page.unwrap();
        assert_eq!(page.page_size, 3);
        assert_eq!(page.total, 7);
        assert_eq!(view.records.len(), 1);

        let past_end = assert_ok!(
            dir.directory
                .view_page(Role::Admin, PageRequest::new(9, 3))
                .await
        );
        assert!(past_end.records.is_empty());
    }

    #[tokio::test]
    async fn test_creation_rules() {
        let dir = TestDirectory::new();

        for role in Role::KNOWN {
            let request = SubjectFactory::request(role, dir.office.id);
            let result = dir.directory.create(Role::Admin, request).await;
            match role {
                Role::External | Role::Internal => assert!(result.is_ok(), "{role}"),
                _ => assert!(matches!(result, Err(AuthzError::Forbidden(_))), "{role}"),
            }
        }

        let err = assert_err!(
            dir.directory
                .create(Role::External, SubjectFactory::request(Role::External, dir.office.id))
                .await
        );
        assert!(matches!(err, AuthzError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_bulk_upload_reports_each_row() {
        let dir = TestDirectory::new();
        let mut rows: Vec<_> = (0..3)
            .map(|_| SubjectFactory::request(Role::External, dir.office.id))
            .collect();
        rows.push(SubjectFactory::request(Role::Admin, dir.office.id));

        let summary = assert_ok!(dir.directory.bulk_create(Role::Internal, rows).await);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.created_count(), 3);
        assert_eq!(summary.failed_count(), 1);
        assert_contains!(summary.failures, |f| f.row == 4);
        assert_eq!(dir.store.len(), 3);
    }

    #[tokio::test]
    async fn test_store_seeded_from_fixture_file() {
        let office_id = uuid::Uuid::new_v4();
        let fixture = format!(
            r#"
offices:
  - id: "{office_id}"
    name: "Chennai"
subjects:
  - name: "Ravi"
    email: "ravi@example.com"
    role: "internal"
    status: "pending"
    office_id: "{office_id}"
  - name: "Meena"
    email: "meena@example.com"
    role: "regional_head"
    status: "active"
"#
        );

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(fixture.as_bytes()).unwrap();

        let fixture = assert_ok!(StoreFixture::from_file(file.path()).await);
        let store = std::sync::Arc::new(assert_ok!(InMemoryRecordStore::from_fixture(fixture)));
        let directory =
            saanvika_authz::EmployeeDirectory::new(store, DirectoryConfig::default());

        let view = assert_ok!(
            directory
                .view_page(Role::SuperAdmin, PageRequest::new(1, 20))
                .await
        );
        // The unrecognized role is stored but never shown
        assert_eq!(view.page.unwrap().total, 2);
        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].subject.name, "Ravi");
        assert!(view.records[0].allows(Action::Verify));
    }
}
