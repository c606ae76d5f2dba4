//! Record storage
//!
//! The record store is the source of truth for subjects and offices and the
//! place where lifecycle mutations are finally accepted or rejected.

/// In-memory record store
pub mod memory;

pub use memory::{InMemoryRecordStore, StoreFixture};

use crate::core::models::{
    Action, Lifecycle, LocationRequest, NewSubject, Office, Page, PageRequest, Role, Subject,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Backend holding employee and office records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// One page of subjects in insertion order, unfiltered
    async fn list_subjects(&self, request: PageRequest) -> Result<Page<Subject>>;

    async fn get_subject(&self, id: Uuid) -> Result<Option<Subject>>;

    async fn list_offices(&self) -> Result<Vec<Office>>;

    /// Persist a new subject in `pending` status
    async fn create_subject(&self, request: NewSubject) -> Result<Subject>;

    /// Apply verify, suspend, unsuspend or delete
    async fn apply_action(&self, id: Uuid, action: Action) -> Result<Lifecycle>;

    async fn create_location_request(
        &self,
        requested_by: Role,
        subject_id: Uuid,
    ) -> Result<LocationRequest>;
}
