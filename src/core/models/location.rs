//! Location-sharing requests

use super::user::types::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request asking an external employee to share their location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRequest {
    pub id: Uuid,
    /// Role of the requester at the time of the request
    pub requested_by: Role,
    /// Subject asked to share their location
    pub subject_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl LocationRequest {
    pub fn new(requested_by: Role, subject_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            requested_by,
            subject_id,
            created_at: chrono::Utc::now(),
        }
    }
}
