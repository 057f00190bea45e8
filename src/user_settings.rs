use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::global_constants;

const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub ocr_api_url: String,
    pub ocr_language: String,
    pub theme_mode: ThemeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl fmt::Debug for UserSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSettings")
            .field("ocr_api_url", &self.ocr_api_url)
            .field("ocr_language", &self.ocr_language)
            .field("theme_mode", &self.theme_mode)
            .field("api_key_present", &self.api_key.is_some())
            .finish()
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            ocr_api_url: global_constants::OCR_SPACE_API_URL.to_string(),
            ocr_language: global_constants::DEFAULT_OCR_LANGUAGE.to_string(),
            theme_mode: ThemeMode::default(),
            api_key: None,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Reads settings from `settings_path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("{} No settings file found, using defaults", LOG_TAG_SETTINGS);
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Could not read settings file {}", settings_path.display()))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse settings file {}", settings_path.display()))?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!("{} {:?}", LOG_TAG_SETTINGS, settings);

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Could not create settings directory {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Could not write settings file {}", settings_path.display()))?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
