use tracing::{debug, warn};

use crate::config;

pub fn load_settings() -> config::Settings {
    let settings = match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; a broken file must not stop the run.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };

    if let Ok(rendered) = settings.to_toml() {
        debug!("effective settings:\n{rendered}");
    }
    settings
}
