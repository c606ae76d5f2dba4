//! Helper functions for creating specific error types

use super::types::AuthzError;

/// Helper functions for creating specific errors
impl AuthzError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store(message.into())
    }

    /// Whether the error is a refusal by policy rather than a failure
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::Forbidden(_) | Self::InvalidTransition { .. })
    }
}
