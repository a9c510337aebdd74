use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SettingsError;
use crate::stepper::{MAX_LENGTH, MIN_LENGTH};

/// Startup defaults for the generator window.
///
/// Read once at launch and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Initial length (5-20, default 12)
    pub default_length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Toast display time in milliseconds (500-10000, default 3000)
    pub toast_duration_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            toast_duration_ms: 3000,
        }
    }
}

impl AppSettings {
    /// Returns the path to the settings file, if the platform has a config dir
    pub fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "PassGen", "PassGen")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Parse settings from JSON and clamp every field into range
    pub fn from_json(data: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_json::from_str(data)?;
        settings.clamp();
        Ok(settings)
    }

    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Load settings from file, or return defaults if missing or unreadable
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate and clamp length and toast duration to allowed ranges
    pub fn clamp(&mut self) {
        self.default_length = self.default_length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.toast_duration_ms = self.toast_duration_ms.clamp(500, 10_000);
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
