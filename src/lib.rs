//! Strip header blocks from every matching file in a directory tree.
//!
//! The library walks a root directory, picks files by name suffix, removes
//! every span matched by an ordered list of removal patterns and rewrites
//! a file only when its text changed.
//!
//! ```no_run
//! use headerstrip::{ProcessOptions, process};
//! use std::path::{Path, PathBuf};
//!
//! let mut rewritten: Vec<PathBuf> = Vec::new();
//! let summary = process(Path::new("src/app/pages"), &ProcessOptions::default(), &mut rewritten)?;
//! println!("rewrote {} of {} files", summary.rewritten.len(), summary.candidates);
//! # Ok::<(), headerstrip::HeaderStripError>(())
//! ```

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod rewrite;
pub mod ui;

pub use crate::core::{HeaderStripError, Result};
pub use config::Config;
pub use reporting::{FileFailure, RunSummary};
pub use rewrite::{ChangeReporter, FileOutcome, ProcessOptions, RemovalRules, Rewriter};

use std::path::Path;

/// Rewrite every candidate under `root` with the given options.
pub fn process(
    root: &Path,
    options: &ProcessOptions,
    reporter: &mut dyn ChangeReporter,
) -> Result<RunSummary> {
    Rewriter::new(options.clone()).process(root, reporter)
}
