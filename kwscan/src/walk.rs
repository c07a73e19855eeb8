use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{SearchError, SearchResult};

/// Matches every `.txt` file at any depth under the root.
pub const DEFAULT_FILE_PATTERN: &str = "**/*.txt";

/// Resolves a root directory and glob pattern into a sorted list of files.
///
/// The walk includes hidden files and ignores no VCS metadata, so the result
/// depends only on the filesystem contents. Sorting makes partitioning and
/// output reproducible across runs with identical inputs. Directory entries
/// that cannot be read are skipped; a missing or non-directory root is an
/// error.
pub fn files(root: &Path, pattern: &str) -> SearchResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SearchError::invalid_root(root));
    }

    let matcher = Pattern::new(pattern)?;

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable directory entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
            matcher.matches_path(rel)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("enumerated {} candidate files under {}", files.len(), root.display());
    Ok(files)
}
