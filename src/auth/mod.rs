//! Authorization
//!
//! This module hosts the role-hierarchy authorization engine.

pub mod rbac;

pub use rbac::{PermissionCheck, RoleAuthorizationEngine, RoleBearing};
