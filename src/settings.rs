use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::common::constants::{
    COPIED_INDICATOR_MS, DEFAULT_BASE_URL, DEFAULT_UTM_CAMPAIGN, DEFAULT_UTM_MEDIUM,
    DEFAULT_UTM_SOURCE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::utm::ParameterSet;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_copied_indicator_ms() -> u64 {
    COPIED_INDICATOR_MS
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Osc52,
    None,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UtmDefaults {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
}

impl Default for UtmDefaults {
    fn default() -> Self {
        Self {
            utm_source: DEFAULT_UTM_SOURCE.to_string(),
            utm_medium: DEFAULT_UTM_MEDIUM.to_string(),
            utm_campaign: DEFAULT_UTM_CAMPAIGN.to_string(),
            utm_term: String::new(),
            utm_content: String::new(),
        }
    }
}

impl UtmDefaults {
    pub fn to_params(&self) -> ParameterSet {
        ParameterSet::full(
            &self.utm_source,
            &self.utm_medium,
            &self.utm_campaign,
            &self.utm_term,
            &self.utm_content,
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub default_base_url: String,
    #[serde(default)]
    pub defaults: UtmDefaults,
    #[serde(default = "default_copied_indicator_ms")]
    pub copied_indicator_ms: u64,
    #[serde(default)]
    pub clipboard: ClipboardBackend,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_base_url: default_base_url(),
            defaults: UtmDefaults::default(),
            copied_indicator_ms: default_copied_indicator_ms(),
            clipboard: ClipboardBackend::default(),
        }
    }
}

impl Settings {
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "settings.json not found at '{}'. Exiting...",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    /// Loads an explicit path if given, otherwise the per-user settings file
    /// when it exists, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::user_settings_path() {
            Some(path) if path.exists() => Self::load(&path.to_string_lossy()),
            _ => {
                debug!("No settings file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn user_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn copied_indicator(&self) -> Duration {
        Duration::from_millis(self.copied_indicator_ms)
    }
}
