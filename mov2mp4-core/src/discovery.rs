//! File discovery module for finding video files to convert.
//!
//! Recursively walks the provided root directory and collects every regular
//! file whose extension exactly matches one of the configured source
//! extensions. Symbolic links are not followed, so traversal cannot be
//! trapped by a link cycle.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds files eligible for conversion under the specified directory.
///
/// The whole subtree below `root_dir` is searched. Matching is an exact
/// comparison against the extension set, so case-sensitive filesystems need
/// both casings listed (e.g. `["mov", "MOV"]`). Results are sorted
/// lexicographically by path so the conversion order is deterministic.
///
/// # Arguments
///
/// * `root_dir` - The directory to search for source files
/// * `extensions` - Recognized source extensions, without the leading dot
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the discovered files, possibly empty
/// * `Err(CoreError::DirectoryNotFound)` - If `root_dir` does not exist
/// * `Err(CoreError::NotADirectory)` - If `root_dir` is not a directory
/// * `Err(CoreError::Walkdir)` - If an error occurs during traversal
pub fn find_convertible_files(root_dir: &Path, extensions: &[String]) -> CoreResult<Vec<PathBuf>> {
    if !root_dir.exists() {
        return Err(CoreError::DirectoryNotFound(root_dir.to_path_buf()));
    }
    if !root_dir.is_dir() {
        return Err(CoreError::NotADirectory(root_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root_dir).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e == ext));
        if matches {
            files.push(entry.into_path());
        }
    }

    // Traversal order is filesystem-dependent; sort for reproducible runs.
    files.sort();

    log::debug!(
        "Discovered {} convertible file(s) under {}",
        files.len(),
        root_dir.display()
    );
    Ok(files)
}
