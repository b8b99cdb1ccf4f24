//! File discovery
//!
//! This module walks the root directory and decides which files are
//! candidates for rewriting.

pub mod walker;

// Re-export commonly used items
pub use walker::{is_candidate, walk_files};
