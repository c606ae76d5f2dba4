//! Error handling for the authorization crate
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{AuthzError, Result};
