//! Error type definitions

use crate::core::models::user::types::{Action, SubjectStatus};
use thiserror::Error;

/// Result type alias for the authorization crate
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization crate
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (incomplete or malformed requests)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requester's role does not permit the action
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Lifecycle transition not defined for the current status
    #[error("Invalid transition: cannot {action} a subject in status {from}")]
    InvalidTransition { from: SubjectStatus, action: Action },

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Record store errors
    #[error("Store error: {0}")]
    Store(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
