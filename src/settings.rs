//! Persistent settings for the roster app.

use crate::scroll::config::{DEFAULT_PER_PAGE, DEFAULT_TRIGGER_OFFSET};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// All persistable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Origin of the roster web app; also used for profile and share links
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_players_path")]
    pub players_path: String,

    // Infinite scroll
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_trigger_offset")]
    pub trigger_offset: f32,

    /// Set on a player's own portal: whether their draft has finished
    #[serde(default)]
    pub draft_complete: Option<bool>,
    /// Fixed draft window (ISO-8601) overriding the weekly schedule
    #[serde(default)]
    pub draft_start: Option<String>,
    #[serde(default)]
    pub draft_end: Option<String>,
}

fn default_api_base() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_players_path() -> String {
    "/api/players".to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_trigger_offset() -> f32 {
    DEFAULT_TRIGGER_OFFSET
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            players_path: default_players_path(),
            per_page: default_per_page(),
            trigger_offset: default_trigger_offset(),
            draft_complete: None,
            draft_start: None,
            draft_end: None,
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("roster-native");
            p.push("settings.json");
            p
        })
    }

    /// Load settings from disk, writing out defaults on first run
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            let settings = Self::default();
            settings.save_to(&path);
            return settings;
        }

        Self::load_from(&path)
    }

    /// Read settings from `path`, falling back to defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::error!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::error!("Failed to write settings file: {}", e);
                } else {
                    tracing::info!("Saved settings to {:?}", path);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize settings: {}", e);
            }
        }
    }
}
