use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Remove every empty directory below `root`, deepest first.
///
/// `root` itself is kept. Directories that still hold something, or that we
/// may not remove, are left as they are. Returns how many were removed.
pub fn remove_empty_dirs(root: &Path) -> usize {
    let dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();

    let mut removed = 0;
    for dir in dirs {
        if fs::remove_dir(&dir).is_ok() {
            debug!(dir = %dir.display(), "removed empty directory");
            removed += 1;
        }
    }
    removed
}
