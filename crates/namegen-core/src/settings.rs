use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_TEMPLATE_FILE, SETTINGS_FILE_NAME};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User settings persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Template file, relative paths resolve against the working directory
    pub template_path: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_FILE),
        }
    }
}

impl AppSettings {
    /// Platform config directory for this app, if the platform has one
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME))
    }

    pub fn save_to_dir(&self, dir: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(SETTINGS_FILE_NAME), json)?;
        Ok(())
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, SettingsError> {
        let json_path = dir.join(SETTINGS_FILE_NAME);
        if json_path.exists() {
            let json = std::fs::read_to_string(json_path)?;
            let settings: AppSettings = serde_json::from_str(&json)?;
            Ok(settings)
        } else {
            Ok(AppSettings::default())
        }
    }

    /// Load from the platform config directory, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(dir) = Self::config_dir() else {
            return Self::default();
        };
        match Self::load_from_dir(&dir) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Some(dir) = Self::config_dir() {
            if let Err(e) = self.save_to_dir(&dir) {
                log::error!("Failed to save settings: {}", e);
            }
        }
    }
}
