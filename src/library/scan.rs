use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, TagSettings};
use crate::error::TagError;

use super::mime::ExtensionTable;
use super::model::MetadataRecord;
use super::tags::read_record;

/// Everything the walk produced: readable records plus the files left out.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<MetadataRecord>,
    pub excluded: Vec<TagError>,
    pub junk_removed: usize,
}

fn is_junk(path: &Path, junk_files: &[String]) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| junk_files.iter().any(|j| j == name))
        .unwrap_or(false)
}

/// All regular files under `dir`, in a stable order.
pub fn walk_files(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Delete deny-listed files and drop them from the stream.
///
/// Returns the remaining paths and how many junk files were deleted.
pub fn filter_junk(paths: Vec<PathBuf>, junk_files: &[String]) -> (Vec<PathBuf>, usize) {
    let mut kept = Vec::with_capacity(paths.len());
    let mut removed = 0;

    for path in paths {
        if !is_junk(&path, junk_files) {
            kept.push(path);
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(file = %path.display(), "removed junk file");
                removed += 1;
            }
            Err(e) => warn!(file = %path.display(), "could not remove junk file: {e}"),
        }
    }

    (kept, removed)
}

/// Walk `dir`, delete junk, and read tags from everything left.
pub fn scan(dir: &Path, library: &LibrarySettings, tags: &TagSettings) -> ScanReport {
    let table = ExtensionTable::new(&tags.mime_extensions);
    let (paths, junk_removed) = filter_junk(walk_files(dir, library), &library.junk_files);

    let mut report = ScanReport {
        junk_removed,
        ..ScanReport::default()
    };

    for path in paths {
        match read_record(&path, &table) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                match &e {
                    TagError::Unrecognized { .. } => debug!("{e}"),
                    _ => warn!("{e}"),
                }
                report.excluded.push(e);
            }
        }
    }

    debug!(
        dir = %dir.display(),
        records = report.records.len(),
        excluded = report.excluded.len(),
        junk_removed = report.junk_removed,
        "scan finished"
    );
    report
}
