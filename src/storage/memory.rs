//! In-memory record store

use super::RecordStore;
use crate::core::models::{
    Action, Lifecycle, LocationRequest, NewSubject, Office, Page, PageRequest, Role, Subject,
    SubjectStatus,
};
use crate::utils::error::{AuthzError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Seed data for an in-memory store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFixture {
    #[serde(default)]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl StoreFixture {
    /// Load a fixture from a YAML or JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading store fixture from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        // YAML is a superset of JSON, so one parser covers both
        let fixture: Self = serde_yaml::from_str(&content)?;

        debug!(
            "Fixture loaded: {} offices, {} subjects",
            fixture.offices.len(),
            fixture.subjects.len()
        );
        Ok(fixture)
    }
}

/// Record store kept entirely in memory
///
/// Enforces the subject lifecycle and office references. It knows nothing
/// about requesters, so rank checks stay with the caller.
///
/// Adding and removing subjects happens under the `order` write lock, which
/// is always taken before any map shard.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    /// Subjects by id
    subjects: DashMap<Uuid, Subject>,
    /// Lowercased email to owning subject
    emails: DashMap<String, Uuid>,
    /// Subject ids in insertion order
    order: RwLock<Vec<Uuid>>,
    offices: RwLock<Vec<Office>>,
    location_requests: RwLock<Vec<LocationRequest>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data
    ///
    /// Fails on duplicate subject ids or emails, and on subjects that point
    /// at an office missing from the fixture.
    pub fn from_fixture(fixture: StoreFixture) -> Result<Self> {
        let store = Self::new();

        for office in fixture.offices {
            store.add_office(office);
        }
        for subject in fixture.subjects {
            store.insert_subject(subject)?;
        }

        info!(
            "In-memory store seeded with {} subjects",
            store.subjects.len()
        );
        Ok(store)
    }

    pub fn add_office(&self, office: Office) {
        self.offices.write().push(office);
    }

    /// Insert a complete record, keeping its id and status
    pub fn insert_subject(&self, subject: Subject) -> Result<()> {
        let id = subject.id();
        let email = subject.email.to_lowercase();
        let mut order = self.order.write();

        if self.subjects.contains_key(&id) {
            return Err(AuthzError::conflict(format!("Subject {} already exists", id)));
        }
        if let Some(office_id) = subject.office_id {
            self.ensure_office_exists(office_id)?;
        }

        match self.emails.entry(email) {
            Entry::Occupied(_) => {
                return Err(AuthzError::conflict(format!(
                    "Email already registered: {}",
                    subject.email
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        self.subjects.insert(id, subject);
        order.push(id);
        Ok(())
    }

    /// Location requests recorded so far, oldest first
    pub fn location_requests(&self) -> Vec<LocationRequest> {
        self.location_requests.read().clone()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Remove a subject if its status allows deletion
    fn remove_subject(&self, id: Uuid) -> Result<Lifecycle> {
        let mut order = self.order.write();

        let removed = self
            .subjects
            .remove_if(&id, |_, subject| subject.status.transition(Action::Delete).is_ok());

        match removed {
            Some((_, subject)) => {
                self.emails.remove(&subject.email.to_lowercase());
                order.retain(|existing| *existing != id);
                Ok(Lifecycle::Removed)
            }
            None => match self.subjects.get(&id) {
                Some(entry) => Err(AuthzError::InvalidTransition {
                    from: entry.status,
                    action: Action::Delete,
                }),
                None => Err(AuthzError::not_found(format!("Subject {}", id))),
            },
        }
    }

    fn ensure_office_exists(&self, office_id: Uuid) -> Result<()> {
        if self.offices.read().iter().any(|office| office.id == office_id) {
            Ok(())
        } else {
            Err(AuthzError::validation(format!(
                "Unknown office: {}",
                office_id
            )))
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_subjects(&self, request: PageRequest) -> Result<Page<Subject>> {
        let order = self.order.read();
        let all: Vec<Subject> = order
            .iter()
            .filter_map(|id| self.subjects.get(id).map(|entry| entry.value().clone()))
            .collect();

        debug!(
            "Listing subjects page {} (size {}) of {}",
            request.page,
            request.page_size,
            all.len()
        );
        Ok(Page::from_slice(&all, request))
    }

    async fn get_subject(&self, id: Uuid) -> Result<Option<Subject>> {
        Ok(self.subjects.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_offices(&self) -> Result<Vec<Office>> {
        Ok(self.offices.read().clone())
    }

    async fn create_subject(&self, request: NewSubject) -> Result<Subject> {
        let subject = Subject::new(request.name, request.email, request.role, request.office_id);
        self.insert_subject(subject.clone())?;

        info!("Created {} subject {}", subject.role, subject.id());
        Ok(subject)
    }

    async fn apply_action(&self, id: Uuid, action: Action) -> Result<Lifecycle> {
        if !action.is_lifecycle() {
            return Err(AuthzError::validation(format!(
                "{} is not a lifecycle action",
                action
            )));
        }

        let outcome = if action == Action::Delete {
            self.remove_subject(id)?
        } else {
            // The shard write lock keeps the check and the update together
            let mut entry = self
                .subjects
                .get_mut(&id)
                .ok_or_else(|| AuthzError::not_found(format!("Subject {}", id)))?;

            let outcome = entry.status.transition(action)?;
            if let Lifecycle::Status(next) = outcome {
                entry.status = next;
                entry.metadata.touch();
            }
            outcome
        };

        info!("Applied {} to subject {}: {:?}", action, id, outcome);
        Ok(outcome)
    }

    async fn create_location_request(
        &self,
        requested_by: Role,
        subject_id: Uuid,
    ) -> Result<LocationRequest> {
        let subject = self
            .subjects
            .get(&subject_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AuthzError::not_found(format!("Subject {}", subject_id)))?;

        if subject.role != Role::External || subject.status != SubjectStatus::Active {
            warn!(
                "Rejected location request for {} subject {} in status {}",
                subject.role, subject_id, subject.status
            );
            return Err(AuthzError::validation(
                "Location can only be requested from active external staff",
            ));
        }

        let request = LocationRequest::new(requested_by, subject_id);
        self.location_requests.write().push(request.clone());

        info!("Location requested from subject {}", subject_id);
        Ok(request)
    }
}
