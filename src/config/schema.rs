use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunesort/config.toml` or `~/.config/tunesort/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags (they can only switch behaviors on)
/// 2) Environment variables (prefix `TUNESORT__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub organize: OrganizeSettings,
    pub tags: TagSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Base names deleted on sight while walking the source tree (exact match).
    pub junk_files: Vec<String>,
    /// Whether to follow symlinks during the walk.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            junk_files: vec!["desktop.ini".to_string()],
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OrganizeSettings {
    /// Top-level directory for compilation albums.
    pub compilation_dir: String,
    /// Flag detected compilations without asking.
    pub trust_compilations: bool,
    /// Remove emptied source directories after moving.
    pub cleanup: bool,
    /// What to do when a different file already sits at the destination.
    pub collision: CollisionPolicy,
}

impl Default for OrganizeSettings {
    fn default() -> Self {
        Self {
            compilation_dir: "Various Artists".to_string(),
            trust_compilations: false,
            cleanup: false,
            collision: CollisionPolicy::Report,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Leave the source in place and log the conflict.
    #[default]
    #[serde(alias = "keep", alias = "skip")]
    Report,
    /// Replace the destination with the source.
    #[serde(alias = "replace")]
    Overwrite,
    /// Delete the source, keeping the destination.
    #[serde(alias = "delete")]
    Discard,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagSettings {
    /// Extra MIME type -> file extension mappings, consulted before the built-in table.
    ///
    /// Example: { "audio/x-custom" = "cst" }
    pub mime_extensions: BTreeMap<String, String>,
}
