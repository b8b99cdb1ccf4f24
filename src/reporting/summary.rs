use serde::Serialize;

use std::path::{Path, PathBuf};

/// A per-file error collected instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// File or directory the error relates to, when known
    pub path: Option<PathBuf>,
    pub error: String,
}

/// Outcome of one pass over a root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Absolute root that was walked
    pub root: PathBuf,
    /// Regular files seen during the walk
    pub files_visited: usize,
    /// Files whose name ends with the configured extension
    pub candidates: usize,
    /// Files rewritten, in processing order
    pub rewritten: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn record_rewritten(&mut self, path: &Path) {
        self.rewritten.push(path.to_path_buf());
    }

    pub fn record_failure(&mut self, path: Option<&Path>, error: &dyn std::error::Error) {
        self.failures.push(FileFailure {
            path: path.map(Path::to_path_buf),
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn unchanged(&self) -> usize {
        self.candidates
            .saturating_sub(self.rewritten.len())
            .saturating_sub(self.failures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::HeaderStripError;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = RunSummary::new("/pages");

        assert_eq!(summary.root, PathBuf::from("/pages"));
        assert_eq!(summary.files_visited, 0);
        assert!(summary.rewritten.is_empty());
        assert!(!summary.has_failures());
    }

    #[test]
    fn test_record_failure_keeps_message() {
        let mut summary = RunSummary::new("/pages");
        let error = HeaderStripError::Encoding("/pages/bad.html".to_string());

        summary.record_failure(Some(Path::new("/pages/bad.html")), &error);

        assert!(summary.has_failures());
        assert_eq!(
            summary.failures[0],
            FileFailure {
                path: Some(PathBuf::from("/pages/bad.html")),
                error: "Encoding error: /pages/bad.html is not valid UTF-8".to_string(),
            }
        );
    }

    #[test]
    fn test_unchanged_count() {
        let mut summary = RunSummary::new("/pages");
        summary.candidates = 5;
        summary.record_rewritten(Path::new("/pages/a.html"));
        summary.record_rewritten(Path::new("/pages/b.html"));
        summary.record_failure(None, &HeaderStripError::Config("x".to_string()));

        assert_eq!(summary.unchanged(), 2);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut summary = RunSummary::new("/pages");
        summary.files_visited = 3;
        summary.candidates = 2;
        summary.record_rewritten(Path::new("/pages/a.html"));

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["root"], "/pages");
        assert_eq!(json["files_visited"], 3);
        assert_eq!(json["candidates"], 2);
        assert_eq!(json["rewritten"][0], "/pages/a.html");
        assert!(json["failures"].as_array().unwrap().is_empty());
    }
}
