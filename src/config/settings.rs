use crate::action::ActionKind;
use crate::transport::TransportKind;
use crate::ui::Theme;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternate settings file
pub const CONFIG_ENV: &str = "GH_SEARCH_CONFIG";
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub transport: TransportKind,
    pub action: ActionKind,
    /// Results visible at once in the selector
    pub page_size: usize,
    /// Explicit gh executable; PATH is searched when unset
    pub gh_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            transport: TransportKind::Rest,
            action: ActionKind::Summary,
            page_size: DEFAULT_PAGE_SIZE,
            gh_path: None,
        }
    }
}

/// Get the path to the settings file
pub fn settings_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
        .join("gh-search");

    Ok(config_dir.join("settings.json"))
}

/// Load settings from disk
/// Falls back to default settings if file doesn't exist or is invalid
pub fn load_settings() -> Settings {
    match settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::debug!("using default settings: {}", e);
            Settings::default()
        }
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| serde_json::from_str::<Settings>(&content).map_err(anyhow::Error::from));

    match parsed {
        Ok(settings) => {
            tracing::debug!(path = %path.display(), ?settings, "loaded settings");
            settings
        }
        Err(e) => {
            tracing::warn!("ignoring invalid settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
