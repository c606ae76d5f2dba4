//! Application services built on the authorization engine

pub mod directory;

pub use directory::{ActionOutcome, BulkUploadSummary, DirectoryRefresher, EmployeeDirectory};
