//! Settings file loading and creation

use std::path::{Path, PathBuf};

use super::types::Settings;
use tutordesk_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "tutordesk";

/// `<config_dir>/tutordesk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults when the file
/// is missing or cannot be parsed
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config at `config_path` unless one exists.
/// Returns whether a file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# Tutordesk configuration

[api]
base_url = "http://localhost:8000/api"
timeout_secs = 10

[ui]
# sessions | tests | activity | distribution | command
default_focus = "sessions"
notification_ttl_ms = 4000
activity_history = 100

[behavior]
refresh_interval_secs = 60        # 0 disables periodic refresh
clear_selection_after_bulk = true
"#;
