//! Employee directory service implementation

use super::types::{ActionOutcome, BulkUploadSummary, RowFailure};
use crate::auth::rbac::RoleAuthorizationEngine;
use crate::config::DirectoryConfig;
use crate::core::models::{
    Action, NewSubject, Office, PageInfo, PageRequest, Role, Subject, ViewModel,
};
use crate::storage::RecordStore;
use crate::utils::error::{AuthzError, Result};
use crate::utils::is_valid_email;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Employee directory
///
/// Asks the engine before every store call, so a denied action never reaches
/// the store. The store still has the final word on every mutation.
#[derive(Clone)]
pub struct EmployeeDirectory {
    pub(super) engine: RoleAuthorizationEngine,
    pub(super) store: Arc<dyn RecordStore>,
    pub(super) config: DirectoryConfig,
}

impl std::fmt::Debug for EmployeeDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeDirectory")
            .field("engine", &self.engine)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EmployeeDirectory {
    /// Create a new directory over a record store
    pub fn new(store: Arc<dyn RecordStore>, config: DirectoryConfig) -> Self {
        info!(
            "Employee directory initialized (page size {}, max {})",
            config.page_size, config.max_page_size
        );

        Self {
            engine: RoleAuthorizationEngine::new(),
            store,
            config,
        }
    }

    pub fn engine(&self) -> &RoleAuthorizationEngine {
        &self.engine
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Annotated view of one page of the directory
    ///
    /// The page is taken from the unfiltered collection and then narrowed to
    /// what the requester may see, so a page can hold fewer visible records
    /// than its size.
    ///
    /// `PageInfo::total` is the size of the whole collection, invisible
    /// subjects included. It discloses how many records exist above the
    /// requester's rank, though nothing about them.
    pub async fn view_page(&self, requester: Role, request: PageRequest) -> Result<ViewModel> {
        let request = request.clamped(self.config.max_page_size);
        let page = self.store.list_subjects(request).await?;

        let info = PageInfo {
            page: page.page,
            page_size: page.page_size,
            total: page.total,
        };

        let mut view = self.engine.annotate(requester, page.items);
        view.page = Some(info);

        debug!(
            "{} sees {} records on page {}",
            requester,
            view.records.len(),
            info.page
        );
        Ok(view)
    }

    /// Authorize an action on a subject and forward it to the store
    pub async fn perform(
        &self,
        requester: Role,
        subject_id: Uuid,
        action: Action,
    ) -> Result<ActionOutcome> {
        if action == Action::CreateSubordinate {
            return Err(AuthzError::validation(
                "create_subordinate takes a creation request, not a subject",
            ));
        }

        let subject = self
            .store
            .get_subject(subject_id)
            .await?
            .ok_or_else(|| AuthzError::not_found(format!("Subject {}", subject_id)))?;

        if let Err(e) = self.engine.authorize(requester, &subject, action) {
            warn!("Refused {} on subject {} for {}: {}", action, subject_id, requester, e);
            return Err(e);
        }

        let outcome = match action {
            Action::View => ActionOutcome::Viewed { subject },
            Action::RequestLocation => ActionOutcome::LocationRequested {
                request: self
                    .store
                    .create_location_request(requester, subject_id)
                    .await?,
            },
            _ => ActionOutcome::Transitioned {
                lifecycle: self.store.apply_action(subject_id, action).await?,
            },
        };

        info!("{} performed {} on subject {}", requester, action, subject_id);
        Ok(outcome)
    }

    /// Create a subordinate after checking rank and request completeness
    pub async fn create(&self, requester: Role, request: NewSubject) -> Result<Subject> {
        let offices = self.store.list_offices().await?;
        self.create_with_offices(requester, request, &offices).await
    }

    /// Create many subjects, collecting per-row failures
    ///
    /// A failing row never stops the remaining rows.
    pub async fn bulk_create(&self, requester: Role, rows: Vec<NewSubject>) -> Result<BulkUploadSummary> {
        let offices = self.store.list_offices().await?;
        let mut summary = BulkUploadSummary {
            total: rows.len(),
            ..Default::default()
        };

        for (index, row) in rows.into_iter().enumerate() {
            let email = row.email.clone();
            match self.create_with_offices(requester, row, &offices).await {
                Ok(subject) => summary.created.push(subject.id()),
                Err(e) => summary.failures.push(RowFailure {
                    row: index + 1,
                    email,
                    reason: e.to_string(),
                }),
            }
        }

        info!(
            "Bulk upload by {}: {} created, {} failed of {}",
            requester,
            summary.created_count(),
            summary.failed_count(),
            summary.total
        );
        Ok(summary)
    }

    /// Check a creation request without forwarding it
    pub fn validate_new_subject(
        &self,
        requester: Role,
        request: &NewSubject,
        offices: &[Office],
    ) -> Result<()> {
        if !self.engine.can_create(requester, request.role) {
            return Err(AuthzError::forbidden(format!(
                "{} cannot create {} subjects",
                requester, request.role
            )));
        }

        if request.name.trim().is_empty() {
            return Err(AuthzError::validation("Name is required"));
        }

        if !is_valid_email(&request.email) {
            return Err(AuthzError::validation(format!(
                "Invalid email: {}",
                request.email
            )));
        }

        match request.office_id {
            None if self.engine.required_office_for_role(request.role) => {
                Err(AuthzError::validation(format!(
                    "Office is required for {} subjects",
                    request.role
                )))
            }
            Some(office_id) if !offices.iter().any(|office| office.id == office_id) => {
                Err(AuthzError::validation(format!("Unknown office: {}", office_id)))
            }
            _ => Ok(()),
        }
    }

    async fn create_with_offices(
        &self,
        requester: Role,
        request: NewSubject,
        offices: &[Office],
    ) -> Result<Subject> {
        if let Err(e) = self.validate_new_subject(requester, &request, offices) {
            warn!("Refused creation of {} by {}: {}", request.role, requester, e);
            return Err(e);
        }

        self.store.create_subject(request).await
    }
}
