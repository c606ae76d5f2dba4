//! Core subject types and enums

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organizational role
///
/// Roles form a total order by [`Role::rank`]. Any role string that is not
/// recognized decodes to [`Role::Unknown`], which carries rank 0 and never
/// grants visibility or authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Field staff outside the office roster
    External,
    /// Office staff
    Internal,
    /// Administrator
    Admin,
    /// Super administrator
    SuperAdmin,
    /// Unrecognized role value
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Every recognized role, in ascending rank order
    pub const KNOWN: [Role; 4] = [Role::External, Role::Internal, Role::Admin, Role::SuperAdmin];

    /// Position of this role in the hierarchy
    ///
    /// `Unknown` sits at 0, below every recognized role.
    pub const fn rank(self) -> u8 {
        match self {
            Role::External => 1,
            Role::Internal => 2,
            Role::Admin => 3,
            Role::SuperAdmin => 4,
            Role::Unknown => 0,
        }
    }

    /// Whether the value came from the closed role set
    pub const fn is_known(self) -> bool {
        !matches!(self, Role::Unknown)
    }

    /// Whether this role administers the organization (admin or super_admin)
    pub const fn is_administrator(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    /// Decode a role string, mapping anything unrecognized to `Unknown`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(Role::Unknown)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::External => write!(f, "external"),
            Role::Internal => write!(f, "internal"),
            Role::Admin => write!(f, "admin"),
            Role::SuperAdmin => write!(f, "super_admin"),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "external" => Ok(Role::External),
            "internal" => Ok(Role::Internal),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Subject lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectStatus {
    /// Created, awaiting verification
    Pending,
    /// Verified and active
    Active,
    /// Suspended
    Inactive,
    /// Unrecognized status value
    #[serde(other)]
    Unknown,
}

impl SubjectStatus {
    /// Decode a status string, mapping anything unrecognized to `Unknown`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(SubjectStatus::Unknown)
    }
}

impl std::fmt::Display for SubjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectStatus::Pending => write!(f, "pending"),
            SubjectStatus::Active => write!(f, "active"),
            SubjectStatus::Inactive => write!(f, "inactive"),
            SubjectStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for SubjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubjectStatus::Pending),
            "active" => Ok(SubjectStatus::Active),
            "inactive" => Ok(SubjectStatus::Inactive),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// Action a requester may take on a subject
///
/// Ordering is the declaration order, so action sets iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    CreateSubordinate,
    Verify,
    Suspend,
    Unsuspend,
    Delete,
    RequestLocation,
}

impl Action {
    /// Whether the action changes the subject's lifecycle status
    pub const fn is_lifecycle(self) -> bool {
        matches!(
            self,
            Action::Verify | Action::Suspend | Action::Unsuspend | Action::Delete
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::View => write!(f, "view"),
            Action::CreateSubordinate => write!(f, "create_subordinate"),
            Action::Verify => write!(f, "verify"),
            Action::Suspend => write!(f, "suspend"),
            Action::Unsuspend => write!(f, "unsuspend"),
            Action::Delete => write!(f, "delete"),
            Action::RequestLocation => write!(f, "request_location"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Action::View),
            "create_subordinate" => Ok(Action::CreateSubordinate),
            "verify" => Ok(Action::Verify),
            "suspend" => Ok(Action::Suspend),
            "unsuspend" => Ok(Action::Unsuspend),
            "delete" => Ok(Action::Delete),
            "request_location" => Ok(Action::RequestLocation),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// Employee record managed by the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Organizational role
    pub role: Role,
    /// Lifecycle status
    pub status: SubjectStatus,
    /// Office affiliation, required for internal and external staff
    #[serde(default)]
    pub office_id: Option<Uuid>,
}

impl Subject {
    /// Create a new subject in `pending` status
    pub fn new(name: String, email: String, role: Role, office_id: Option<Uuid>) -> Self {
        Self {
            metadata: Metadata::new(),
            name,
            email,
            role,
            status: SubjectStatus::Pending,
            office_id,
        }
    }

    /// Get subject ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Builder-style status override, mostly for fixtures
    pub fn with_status(mut self, status: SubjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Check if subject is active
    pub fn is_active(&self) -> bool {
        matches!(self.status, SubjectStatus::Active)
    }
}

/// Request to create a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub office_id: Option<Uuid>,
}

impl NewSubject {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            office_id: None,
        }
    }

    pub fn with_office(mut self, office_id: Uuid) -> Self {
        self.office_id = Some(office_id);
        self
    }
}
