use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::error::{HeaderStripError, Result};
use crate::discovery::{is_candidate, walk_files};
use crate::reporting::RunSummary;
use crate::reporting::logging;
use crate::rewrite::RemovalRules;

/// Receives a notice for every file about to be rewritten.
pub trait ChangeReporter {
    fn file_rewritten(&mut self, path: &Path);
}

/// Collects rewritten paths, mostly useful in tests and for embedding.
impl ChangeReporter for Vec<PathBuf> {
    fn file_rewritten(&mut self, path: &Path) {
        self.push(path.to_path_buf());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Rewritten,
}

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// File-name suffix of candidate files
    pub extension: String,
    pub rules: RemovalRules,
    /// Collect per-file errors instead of aborting on the first one
    pub keep_going: bool,
    pub follow_links: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            extension: crate::core::constants::defaults::EXTENSION.to_string(),
            rules: RemovalRules::default(),
            keep_going: false,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    options: ProcessOptions,
}

impl Rewriter {
    pub fn new(options: ProcessOptions) -> Self {
        Self { options }
    }

    /// Strip every removal rule from one file and overwrite it if its text
    /// changed. The reporter is notified before the write happens.
    pub fn rewrite_file(
        &self,
        path: &Path,
        reporter: &mut dyn ChangeReporter,
    ) -> Result<FileOutcome> {
        let original =
            fs::read_to_string(path).map_err(|e| HeaderStripError::file_access(path, e))?;
        let stripped = self.options.rules.apply(&original);

        if stripped.as_ref() == original.as_str() {
            logging::log_candidate(path, false);
            return Ok(FileOutcome::Unchanged);
        }

        logging::log_candidate(path, true);
        reporter.file_rewritten(path);
        fs::write(path, stripped.as_bytes()).map_err(|e| HeaderStripError::file_access(path, e))?;

        Ok(FileOutcome::Rewritten)
    }

    /// Walk `root` and rewrite every candidate file.
    ///
    /// Without `keep_going` the first walk or file error is returned and
    /// files rewritten before it stay rewritten. With it, errors are
    /// recorded in the summary and the walk continues.
    pub fn process(&self, root: &Path, reporter: &mut dyn ChangeReporter) -> Result<RunSummary> {
        let started = Instant::now();
        let root = resolve_root(root)?;
        let mut summary = RunSummary::new(&root);

        for entry in walk_files(&root, self.options.follow_links) {
            let path = match entry {
                Ok(path) => path,
                Err(err) if self.options.keep_going => {
                    logging::log_error("Could not walk directory", Some(&err));
                    summary.record_failure(None, &err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            summary.files_visited += 1;
            if !is_candidate(&path, &self.options.extension) {
                continue;
            }
            summary.candidates += 1;

            match self.rewrite_file(&path, reporter) {
                Ok(FileOutcome::Rewritten) => summary.record_rewritten(&path),
                Ok(FileOutcome::Unchanged) => {}
                Err(err) if self.options.keep_going => {
                    logging::log_error("Could not rewrite file", Some(&err));
                    summary.record_failure(Some(&path), &err);
                }
                Err(err) => return Err(err),
            }
        }

        logging::log_run_complete(&summary, started.elapsed().as_millis());
        Ok(summary)
    }
}

/// Resolve `root` to an absolute path of an existing directory.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => HeaderStripError::FileNotFound(root.display().to_string()),
        _ => HeaderStripError::Io(e),
    })?;

    if !resolved.is_dir() {
        return Err(HeaderStripError::InvalidArgument(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    Ok(resolved)
}
