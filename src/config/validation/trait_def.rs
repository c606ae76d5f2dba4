//! Validation trait shared by every configuration section

/// A configuration section that can check its own invariants
///
/// Errors are plain messages; `Config::validate` wraps them into
/// `AuthzError::Config` with the section name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
