use std::path::{Path, PathBuf};

use crate::error::PathError;
use crate::library::MetadataRecord;

/// Relative destination: `[top, album?, filename]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPath {
    segments: Vec<String>,
}

impl DestinationPath {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Absolute destination below `root`.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(self.to_path_buf())
    }
}

/// Make tag text safe as a single path segment: separators become `_`,
/// leading dots are dropped.
pub fn sanitize_segment(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let trimmed = replaced.trim_start_matches('.');
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `"01 Title.ext"`, or `"Title.ext"` without a track number.
pub fn file_name(record: &MetadataRecord) -> Result<String, PathError> {
    let title = record
        .title
        .as_deref()
        .ok_or(PathError::MissingRequiredTag("title"))?;
    let name = match record.track_number {
        Some(n) => format!("{n:02} {title}{}", record.extension),
        None => format!("{title}{}", record.extension),
    };
    Ok(sanitize_segment(&name))
}

/// Destination for `record`, relative to the output root.
///
/// Pure: the same record, flag and compilation directory always give the
/// same path.
pub fn build(
    record: &MetadataRecord,
    in_compilation: bool,
    compilation_dir: &str,
) -> Result<DestinationPath, PathError> {
    let mut segments = Vec::with_capacity(3);

    if in_compilation {
        let album = record
            .album
            .as_deref()
            .ok_or_else(|| PathError::CompilationWithoutAlbum(record.source_path.clone()))?;
        segments.push(sanitize_segment(compilation_dir));
        segments.push(sanitize_segment(album));
    } else {
        let artist = record
            .artist
            .as_deref()
            .ok_or(PathError::MissingRequiredTag("artist"))?;
        segments.push(sanitize_segment(artist));
        if let Some(album) = record.album.as_deref() {
            segments.push(sanitize_segment(album));
        }
    }

    segments.push(file_name(record)?);
    Ok(DestinationPath { segments })
}
