//! Utility modules
//!
//! - **error**: Error type and result alias
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging & monitoring

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"#).expect("valid email regex")
});

/// Check if a string is a valid email
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
