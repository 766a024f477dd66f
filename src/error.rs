//! Error types for tunesort
//!
//! Every error here is local to a single file: the run logs it, excludes
//! the file and moves on.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a walked file never becomes a `MetadataRecord`.
#[derive(Debug, Error)]
pub enum TagError {
    /// Not a tag container at all (cover art, text files, ...)
    #[error("unrecognized file format: {}", .path.display())]
    Unrecognized { path: PathBuf },

    /// Recognized container that failed to parse
    #[error("possibly corrupted: {}: {reason}", .path.display())]
    CorruptContainer { path: PathBuf, reason: String },

    /// Container parsed but carries no `audio/*` MIME type
    #[error("not an audio file: {}", .path.display())]
    NotAudio { path: PathBuf },

    /// None of the file's MIME types maps to a known extension
    #[error("no file extension known for {} (mime types: {})", .path.display(), .mime_types.join(", "))]
    NoExtension {
        path: PathBuf,
        mime_types: Vec<String>,
    },

    /// Track number tag that is not `N` or `N/M`
    #[error("could not parse track number {raw:?}: {}", .path.display())]
    TrackNumberParseFailure { path: PathBuf, raw: String },

    /// I/O error while opening the file
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TagError {
    /// Short stable label, used for summary counters.
    pub fn kind(&self) -> &'static str {
        match self {
            TagError::Unrecognized { .. } => "unrecognized",
            TagError::CorruptContainer { .. } => "corrupt",
            TagError::NotAudio { .. } => "not-audio",
            TagError::NoExtension { .. } => "no-extension",
            TagError::TrackNumberParseFailure { .. } => "bad-track-number",
            TagError::Io { .. } => "io",
        }
    }
}

/// Failures computing a destination path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Title or artist tag missing; the file stays where it is
    #[error("missing required tag: {0}")]
    MissingRequiredTag(&'static str),

    /// A record was flagged as a compilation member without an album.
    /// The detector only flags album groups, so this is a logic fault.
    #[error("compilation member without album: {}", .0.display())]
    CompilationWithoutAlbum(PathBuf),
}
