//! Tutordesk Library
//!
//! Keyboard-driven terminal front end for a tutoring center's daily session
//! list. The binary parses arguments and calls [`run`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tutordesk_api::{HttpSessionRepository, InMemorySessionRepository};
use tutordesk_app::config::{self, Settings};
use tutordesk_core::prelude::*;

/// Simulated backend latency in demo mode, so busy markers are visible
const DEMO_LATENCY: Duration = Duration::from_millis(400);

/// Options resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file; must exist when given
    pub config_path: Option<PathBuf>,
    /// Overrides `api.base_url`
    pub api_url: Option<String>,
    /// Use the in-memory demo repository instead of the REST backend
    pub demo: bool,
}

/// Load settings for `options` and apply command-line overrides
pub fn resolve_settings(options: &RunOptions) -> Result<Settings> {
    let mut settings = match &options.config_path {
        Some(path) if !path.exists() => {
            return Err(Error::ConfigNotFound { path: path.clone() });
        }
        Some(path) => config::load_settings(path),
        None => match config::default_config_path() {
            Some(path) => config::load_settings(&path),
            None => {
                warn!("No config directory available, using defaults");
                Settings::default()
            }
        },
    };

    if let Some(url) = &options.api_url {
        settings.api.base_url = url.clone();
    }

    settings.validate()?;
    Ok(settings)
}

/// Main application entry point
pub async fn run(options: RunOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    tutordesk_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Tutordesk starting");
    info!("═══════════════════════════════════════════════════════");

    let settings = resolve_settings(&options).context("Loading settings")?;

    let result = if options.demo {
        info!("Demo mode: in-memory sessions");
        let repo = InMemorySessionRepository::demo().with_latency(DEMO_LATENCY);
        tutordesk_tui::run(settings, Arc::new(repo)).await
    } else {
        let repo = HttpSessionRepository::with_timeout(
            settings.api.base_url.clone(),
            settings.request_timeout(),
        )
        .context("Creating backend client")?;
        info!("Backend: {} (timeout {:?})", repo.base_url(), repo.timeout());
        tutordesk_tui::run(settings, Arc::new(repo)).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Tutordesk exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempdir().unwrap();
        let options = RunOptions {
            config_path: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(matches!(
            resolve_settings(&options),
            Err(Error::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_api_url_flag_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://file.example/api\"\n").unwrap();

        let options = RunOptions {
            config_path: Some(path.clone()),
            api_url: Some("https://flag.example/api".into()),
            demo: false,
        };
        let settings = resolve_settings(&options).unwrap();
        assert_eq!(settings.api.base_url, "https://flag.example/api");

        let from_file = resolve_settings(&RunOptions {
            config_path: Some(path),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(from_file.api.base_url, "http://file.example/api");
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let options = RunOptions {
            config_path: Some(path),
            api_url: Some("ftp://nope".into()),
            demo: false,
        };
        assert!(matches!(
            resolve_settings(&options),
            Err(Error::ConfigInvalid { .. })
        ));
    }
}
