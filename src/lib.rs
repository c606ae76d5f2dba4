//! # saanvika-authz
//!
//! Role-hierarchy authorization for the SAANVIKA employee administration console.
//!
//! Four roles form a strict order, `external < internal < admin < super_admin`.
//! A requester sees only subjects ranked below it (a super admin sees everyone),
//! creates only roles ranked below it, and gets a per-subject action set that
//! depends on the subject's role and lifecycle status.
//!
//! ## Features
//!
//! - **Pure rules**: visibility, creation and action sets are deterministic
//!   functions of role and status
//! - **Fail closed**: unrecognized roles are neither visible nor creatable
//! - **Directory service**: authorizes every action before it reaches the
//!   record store
//! - **Live views**: background refresh of annotated directory pages
//!
//! ## Quick Start
//!
//! ```rust
//! use saanvika_authz::{Action, Role, RoleAuthorizationEngine, Subject, SubjectStatus};
//!
//! let engine = RoleAuthorizationEngine::new();
//! let clerk = Subject::new(
//!     "Asha".to_string(),
//!     "asha@example.com".to_string(),
//!     Role::Internal,
//!     None,
//! )
//! .with_status(SubjectStatus::Pending);
//!
//! let actions = engine.authorized_actions(Role::Admin, &clerk);
//! assert!(actions.contains(&Action::Verify));
//! assert!(actions.contains(&Action::Delete));
//! assert!(engine.authorized_actions(Role::External, &clerk).is_empty());
//! ```
//!
//! ## Directory Mode
//!
//! ```rust,no_run
//! use saanvika_authz::{Config, EmployeeDirectory, InMemoryRecordStore, PageRequest, Role};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/saanvika.yaml").await?;
//!     let store = Arc::new(InMemoryRecordStore::new());
//!     let directory = EmployeeDirectory::new(store, config.directory().clone());
//!
//!     let view = directory.view_page(Role::Admin, PageRequest::new(1, 20)).await?;
//!     println!("{} visible records", view.records.len());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{PermissionCheck, RoleAuthorizationEngine, RoleBearing};
pub use config::Config;
pub use utils::error::{AuthzError, Result};

pub use core::models::{
    Action, Lifecycle, LocationRequest, NewSubject, Office, Page, PageInfo, PageRequest, Role,
    Subject, SubjectStatus, SubjectView, ViewModel,
};
pub use services::{ActionOutcome, BulkUploadSummary, DirectoryRefresher, EmployeeDirectory};
pub use storage::{InMemoryRecordStore, RecordStore, StoreFixture};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata stamped by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
