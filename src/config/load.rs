use std::{env, path::PathBuf};

use super::schema::Settings;

/// Layered settings for a tunesort run.
///
/// Built-in defaults sit at the bottom, a TOML file (if one exists) goes on
/// top of them, and `TUNESORT__SECTION__KEY` variables win over both.
impl Settings {
    /// Build the layered settings. A missing file is not an error.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TUNESORT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values that would produce broken destination paths.
    pub fn validate(&self) -> Result<(), String> {
        let dir = self.organize.compilation_dir.trim();
        if dir.is_empty() {
            return Err("organize.compilation_dir must not be empty".to_string());
        }
        if dir.contains(['/', '\\']) {
            return Err("organize.compilation_dir must be a single path segment".to_string());
        }
        if self.library.junk_files.iter().any(|f| f.trim().is_empty()) {
            return Err("library.junk_files must not contain empty names".to_string());
        }
        if self
            .tags
            .mime_extensions
            .values()
            .any(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err("tags.mime_extensions values must not be empty".to_string());
        }
        Ok(())
    }

    /// Render the effective settings as TOML, for debug logging.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Where to look for the config file: `TUNESORT_CONFIG_PATH` when set,
/// otherwise the per-user default.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNESORT_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Per-user config file: `tunesort/config.toml` inside `$XDG_CONFIG_HOME`,
/// or inside `~/.config`. `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("tunesort").join("config.toml"))
}
