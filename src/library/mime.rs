use std::collections::BTreeMap;
use std::path::Path;

use lofty::file::FileType;

/// Built-in MIME type -> extension table (without the dot).
const KNOWN_EXTENSIONS: &[(&str, &str)] = &[
    ("audio/mpeg", "mp3"),
    ("audio/mp3", "mp3"),
    ("audio/flac", "flac"),
    ("audio/x-flac", "flac"),
    ("audio/ogg", "ogg"),
    ("audio/vorbis", "ogg"),
    ("audio/opus", "opus"),
    ("audio/speex", "spx"),
    ("audio/mp4", "m4a"),
    ("audio/x-m4a", "m4a"),
    ("audio/aac", "aac"),
    ("audio/wav", "wav"),
    ("audio/x-wav", "wav"),
    ("audio/aiff", "aiff"),
    ("audio/x-aiff", "aiff"),
    ("audio/ape", "ape"),
    ("audio/x-ape", "ape"),
    ("audio/wavpack", "wv"),
    ("audio/x-wavpack", "wv"),
    ("audio/musepack", "mpc"),
    ("audio/x-musepack", "mpc"),
    ("video/mp4", "mp4"),
];

/// MIME types a container of `file_type` reports, most specific first.
pub fn mime_types_for(file_type: &FileType) -> Vec<String> {
    let mimes: &[&str] = match file_type {
        FileType::Mpeg => &["audio/mpeg", "audio/mp3"],
        FileType::Flac => &["audio/flac", "audio/x-flac"],
        FileType::Vorbis => &["audio/ogg", "audio/vorbis"],
        FileType::Opus => &["audio/ogg", "audio/opus"],
        FileType::Speex => &["audio/ogg", "audio/speex"],
        FileType::Mp4 => &["audio/mp4", "audio/x-m4a"],
        FileType::Aac => &["audio/aac"],
        FileType::Wav => &["audio/wav", "audio/x-wav"],
        FileType::Aiff => &["audio/aiff", "audio/x-aiff"],
        FileType::Ape => &["audio/ape", "audio/x-ape"],
        FileType::WavPack => &["audio/wavpack", "audio/x-wavpack"],
        FileType::Mpc => &["audio/musepack", "audio/x-musepack"],
        _ => &[],
    };
    mimes.iter().map(|m| m.to_string()).collect()
}

/// Sniff the file header. Used to tell MP4 video apart from MP4 audio,
/// which share a container type.
pub fn sniff_mime(path: &Path) -> Option<String> {
    infer::get_from_path(path)
        .ok()
        .flatten()
        .map(|kind| kind.mime_type().to_string())
}

/// Combine the container's MIME list with a sniffed type.
///
/// A sniffed `video/*` type replaces the container list; anything else only
/// appends when not already present.
pub fn merge_sniffed(mut mimes: Vec<String>, sniffed: Option<String>) -> Vec<String> {
    match sniffed {
        Some(s) if s.starts_with("video/") => vec![s],
        Some(s) => {
            if !mimes.contains(&s) {
                mimes.push(s);
            }
            mimes
        }
        None => mimes,
    }
}

pub fn has_audio_mime(mimes: &[String]) -> bool {
    mimes.iter().any(|m| m.starts_with("audio/"))
}

/// Maps MIME types to extensions, with user overrides taking precedence.
#[derive(Debug, Clone, Default)]
pub struct ExtensionTable {
    overrides: BTreeMap<String, String>,
}

impl ExtensionTable {
    pub fn new(overrides: &BTreeMap<String, String>) -> Self {
        let overrides = overrides
            .iter()
            .map(|(mime, ext)| {
                (
                    mime.trim().to_ascii_lowercase(),
                    ext.trim().trim_start_matches('.').to_string(),
                )
            })
            .filter(|(mime, ext)| !mime.is_empty() && !ext.is_empty())
            .collect();
        Self { overrides }
    }

    /// Extension for one MIME type, with the leading dot.
    pub fn lookup(&self, mime: &str) -> Option<String> {
        let mime = mime.trim().to_ascii_lowercase();
        if let Some(ext) = self.overrides.get(&mime) {
            return Some(format!(".{ext}"));
        }
        KNOWN_EXTENSIONS
            .iter()
            .find(|(m, _)| *m == mime)
            .map(|(_, ext)| format!(".{ext}"))
    }

    /// Extension of the first MIME type that resolves.
    pub fn first_resolvable(&self, mimes: &[String]) -> Option<String> {
        mimes.iter().find_map(|m| self.lookup(m))
    }
}
