use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Lazily walk every regular file beneath `root`, sorted by file name.
///
/// Hidden files and ignore files do not filter the walk. A symlink to a file
/// is always yielded under its own path. `follow_links` only decides whether
/// the walk descends into symlinked directories.
pub fn walk_files(root: &Path, follow_links: bool) -> impl Iterator<Item = Result<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    builder
        .build()
        .filter_map(|entry| -> Option<Result<PathBuf>> {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|file_type| {
                        file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
                    });
                    is_file.then(|| Ok(entry.into_path()))
                }
                Err(err) => Some(Err(err.into())),
            }
        })
}

/// Whether the file name of `path` ends with `extension`, compared byte for
/// byte and case-sensitively.
pub fn is_candidate(path: &Path, extension: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(extension.as_bytes()))
}
