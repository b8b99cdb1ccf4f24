//! Run reporting
//!
//! This module holds the end-of-run summary and the structured
//! logging helpers used across the application.

pub mod logging;
pub mod summary;

// Re-export commonly used items
pub use summary::{FileFailure, RunSummary};
