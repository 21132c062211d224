use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub search_endpoint_url: String,
    pub region: Option<String>,
    pub user_agent: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            search_endpoint_url: global_constants::DEFAULT_SEARCH_ENDPOINT_URL.to_string(),
            region: None,
            user_agent: global_constants::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl UserSettings {
    /// Reads the settings file from the platform config directory.
    /// Nothing is ever written back.
    pub fn load() -> anyhow::Result<Self> {
        match Self::get_settings_file_path() {
            Some(settings_path) => Self::load_from_path(&settings_path),
            None => {
                log::debug!("[SETTINGS] Could not find config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::debug!(
                "[SETTINGS] No settings file at {:?}, using defaults",
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Unable to read settings file {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed settings file {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Search endpoint: {}",
            settings.search_endpoint_url
        );
        if let Some(region) = &settings.region {
            log::debug!("[SETTINGS] Region: {}", region);
        }

        Ok(settings)
    }

    fn get_settings_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| {
            config_dir
                .join(global_constants::SETTINGS_DIRECTORY_NAME)
                .join(global_constants::SETTINGS_FILE_NAME)
        })
    }
}
