use std::path::Path;

use lofty::error::{ErrorKind, LoftyError};
use lofty::file::{FileType, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag};
use id3::TagLike;
use tracing::trace;

use crate::error::TagError;

use super::mime::{ExtensionTable, has_audio_mime, merge_sniffed, mime_types_for, sniff_mime};
use super::model::MetadataRecord;

/// Open `path` as a tag container and read it into a `MetadataRecord`.
///
/// The container type is sniffed from content first, then from the extension.
pub fn read_record(path: &Path, table: &ExtensionTable) -> Result<MetadataRecord, TagError> {
    let probe = Probe::open(path).map_err(|e| classify(path, e))?;
    let probe = probe.guess_file_type().map_err(|source| TagError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tagged = probe.read().map_err(|e| classify(path, e))?;

    let file_type = tagged.file_type();
    let mut mime_types = mime_types_for(&file_type);
    if matches!(file_type, FileType::Mp4) {
        mime_types = merge_sniffed(mime_types, sniff_mime(path));
    }

    if !has_audio_mime(&mime_types) {
        return Err(TagError::NotAudio {
            path: path.to_path_buf(),
        });
    }

    let extension = table
        .first_resolvable(&mime_types)
        .ok_or_else(|| TagError::NoExtension {
            path: path.to_path_buf(),
            mime_types: mime_types.clone(),
        })?;

    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

    let (artist, album, title, raw_track) = match tag {
        Some(tag) => (
            first_value(tag, &ItemKey::TrackArtist),
            first_value(tag, &ItemKey::AlbumTitle),
            first_value(tag, &ItemKey::TrackTitle),
            first_value(tag, &ItemKey::TrackNumber),
        ),
        None => (None, None, None, None),
    };

    // lofty drops a non-numeric TRCK when building the generic tag, so ID3v2
    // containers are read through `id3` for the untouched frame text.
    let raw_track = id3_track_text(path, file_type).or(raw_track);
    let track_number = match raw_track {
        Some(raw) => parse_track_number(&raw, path)?,
        None => None,
    };

    trace!(
        file = %path.display(),
        ?file_type,
        ?artist,
        ?album,
        ?title,
        ?track_number,
        "read tags"
    );

    Ok(MetadataRecord {
        source_path: path.to_path_buf(),
        artist,
        album,
        title,
        track_number,
        mime_types,
        extension,
        in_compilation: false,
    })
}

/// First value stored under `key`, trimmed; blank counts as absent.
fn first_value(tag: &Tag, key: &ItemKey) -> Option<String> {
    tag.get_string(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Raw `TRCK` text for containers that carry ID3v2, first value only.
fn id3_track_text(path: &Path, file_type: FileType) -> Option<String> {
    let tag = match file_type {
        FileType::Mpeg | FileType::Aac => id3::Tag::read_from_path(path),
        FileType::Wav => id3::Tag::read_from_wav_path(path),
        FileType::Aiff => id3::Tag::read_from_aiff_path(path),
        _ => return None,
    }
    .ok()?;

    let text = tag.get("TRCK")?.content().text()?;
    let first = text.split('\0').next().unwrap_or_default().trim();
    (!first.is_empty()).then(|| first.to_string())
}

/// Parse a track number tag: `"3"` and `"3/12"` both give 3, blank gives `None`.
pub fn parse_track_number(raw: &str, path: &Path) -> Result<Option<u32>, TagError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let first = raw.split('/').next().unwrap_or_default().trim();
    first
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TagError::TrackNumberParseFailure {
            path: path.to_path_buf(),
            raw: raw.to_string(),
        })
}

fn classify(path: &Path, err: LoftyError) -> TagError {
    match err.kind() {
        ErrorKind::UnknownFormat => TagError::Unrecognized {
            path: path.to_path_buf(),
        },
        ErrorKind::Io(io) => TagError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(io.kind(), io.to_string()),
        },
        _ => TagError::CorruptContainer {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Option<u32>, TagError> {
        parse_track_number(raw, Path::new("/music/song.mp3"))
    }

    #[test]
    fn track_number_takes_first_component() {
        assert_eq!(parse("3/12").unwrap(), Some(3));
        assert_eq!(parse("7").unwrap(), Some(7));
        assert_eq!(parse(" 04 / 10 ").unwrap(), Some(4));
    }

    #[test]
    fn blank_track_number_is_absent() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn malformed_track_number_is_rejected() {
        for raw in ["abc", "/12", "-1", "1.5"] {
            match parse(raw) {
                Err(TagError::TrackNumberParseFailure { raw: got, path }) => {
                    assert_eq!(got, raw);
                    assert_eq!(path, Path::new("/music/song.mp3"));
                }
                other => panic!("{raw:?} parsed as {other:?}"),
            }
        }
    }
}
