//! Integration tests for saanvika-authz
//!
//! These tests drive the public API against real in-memory records
//! without mocking.

pub mod authorization_tests;
pub mod config_validation_tests;
pub mod directory_flow_tests;
pub mod error_handling_tests;
