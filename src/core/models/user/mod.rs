//! Subject models
//!
//! This module defines employee records, roles, statuses and the lifecycle
//! state machine they move through.

pub mod lifecycle;
pub mod types;
