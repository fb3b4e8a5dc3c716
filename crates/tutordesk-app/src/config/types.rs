//! Configuration types for Tutordesk
//!
//! `Settings` mirrors `config.toml`; every field has a default so partial
//! files are fine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tutordesk_core::prelude::*;

use crate::focus::FocusSection;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the REST backend, e.g. `http://localhost:8000/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Section focused at startup and after an overlay is torn down
    #[serde(default)]
    pub default_focus: FocusSection,

    /// How long a status-bar message stays visible
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,

    /// Messages kept in the activity feed
    #[serde(default = "default_activity_history")]
    pub activity_history: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_focus: FocusSection::Sessions,
            notification_ttl_ms: default_notification_ttl_ms(),
            activity_history: default_activity_history(),
        }
    }
}

fn default_notification_ttl_ms() -> u64 {
    4000
}

fn default_activity_history() -> usize {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Periodic refetch interval; 0 disables
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Clear the selection once a bulk quick action has been issued
    #[serde(default = "default_true")]
    pub clear_selection_after_bulk: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            clear_selection_after_bulk: true,
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.notification_ttl_ms)
    }

    /// `None` when periodic refresh is disabled
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.behavior.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Reject settings the application cannot run with
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config_invalid(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.ui.default_focus == FocusSection::Detail {
            return Err(Error::config_invalid(
                "ui.default_focus cannot be 'detail'",
            ));
        }
        if self.ui.activity_history == 0 {
            return Err(Error::config_invalid(
                "ui.activity_history must be at least 1",
            ));
        }
        Ok(())
    }
}
