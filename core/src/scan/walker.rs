//! Directory traversal helpers

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk every regular file in a directory tree
///
/// Entries that cannot be read during the walk are skipped. Symlinks are
/// not descended into, but a symlink pointing at a regular file counts as a
/// file.
pub fn walk_files<F>(root: &Path, mut handler: F)
where
    F: FnMut(&Path),
{
    for entry in WalkDir::new(root).into_iter().filter_map(|e| match e {
        Ok(entry) => Some(entry),
        Err(err) => {
            debug!("Walk error under {}: {}", root.display(), err);
            None
        }
    }) {
        let path = entry.path();
        if entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file()) {
            handler(path);
        }
    }
}

/// Collect files whose extension matches (case-insensitive), sorted by path
///
/// Extension should not include the dot (e.g., "json" not ".json").
pub fn collect_files_with_extension(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    walk_files(root, |path| {
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| extensions.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false);

        if matches {
            files.push(path.to_path_buf());
        }
    });

    files.sort();
    files
}
