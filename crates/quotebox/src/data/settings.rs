//! Application settings management
//!
//! User preferences read from `settings.json` in the config directory.

use crate::config::app::SETTINGS_FILE;
use crate::config::network::{CONNECT_TIMEOUT_SECS, DEFAULT_API_URL, READ_TIMEOUT_SECS};
use crate::data::storage;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Network ===
    /// Base URL of the quote service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read timeout in seconds
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,

    // === Interface ===
    /// Open the favorites panel on startup
    #[serde(default)]
    pub show_favorites_on_start: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    CONNECT_TIMEOUT_SECS
}

fn default_read_timeout() -> u64 {
    READ_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            show_favorites_on_start: false,
        }
    }
}

impl Settings {
    /// Load settings from a directory, falling back to defaults
    ///
    /// A missing file yields defaults silently; an unreadable or malformed
    /// one is logged and also yields defaults.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        match storage::load_from::<Settings>(&path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring settings file");
                Self::default()
            }
        }
    }
}
