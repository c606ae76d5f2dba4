//! Core data structures
//!
//! Roles, subjects, lifecycle and the view models handed to callers.

pub mod models;
