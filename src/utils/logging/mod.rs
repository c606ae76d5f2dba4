//! Logging utilities
//!
//! Structured logging goes through `tracing`; this module only installs the
//! subscriber.

pub mod subscriber;

pub use subscriber::{build_filter, init_logging};
