//! Employee directory service
//!
//! Sits between a presentation caller and the record store: fetches pages,
//! annotates them with what the requester may do, and gates every mutation
//! on the authorization engine before it reaches the store.

mod refresh;
mod service;
mod types;


// Re-export public types
pub use refresh::DirectoryRefresher;
pub use service::EmployeeDirectory;
pub use types::{ActionOutcome, BulkUploadSummary, RowFailure};
