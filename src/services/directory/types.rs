//! Directory service types

use crate::core::models::{Lifecycle, LocationRequest, Subject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of an authorized action on a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The subject's details, for `view`
    Viewed { subject: Subject },
    /// The lifecycle change the store applied
    Transitioned { lifecycle: Lifecycle },
    /// The location request the store recorded
    LocationRequested { request: LocationRequest },
}

/// A row that could not be created during a bulk upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    /// 1-based row number in the upload
    pub row: usize,
    pub email: String,
    pub reason: String,
}

/// Aggregated result of a bulk upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUploadSummary {
    pub total: usize,
    /// Ids of the subjects that were created, in upload order
    pub created: Vec<Uuid>,
    pub failures: Vec<RowFailure>,
}

impl BulkUploadSummary {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty() && self.created.len() == self.total
    }
}
