//! Header removal
//!
//! This module holds the removal rules and the rewriter that applies
//! them to every candidate file under a root directory.

pub mod rewriter;
pub mod rules;

// Re-export commonly used items
pub use rewriter::{ChangeReporter, FileOutcome, ProcessOptions, Rewriter};
pub use rules::RemovalRules;
