use std::path::PathBuf;

/// Normalized tag data for one audio file, read eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub source_path: PathBuf,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub track_number: Option<u32>,
    /// Ordered, without duplicates. The first one with a known extension wins.
    pub mime_types: Vec<String>,
    /// Includes the leading dot, e.g. `.mp3`.
    pub extension: String,
    /// Set by the compilation detector before any path is built.
    pub in_compilation: bool,
}

impl MetadataRecord {
    /// `"03 Title by Artist"`, or `"Title by Artist"` without a track number.
    pub fn printable(&self) -> String {
        let title = self.title.as_deref().unwrap_or("?");
        let artist = self.artist.as_deref().unwrap_or("?");
        match self.track_number {
            Some(n) => format!("{n:02} {title} by {artist}"),
            None => format!("{title} by {artist}"),
        }
    }
}
