//! Local preferences and their file-backed store.
//!
//! # Design
//! One small record persisted as JSON under a single named key; the file is
//! named after the key inside the store directory. Loading merges whatever
//! was persisted over the defaults (`#[serde(default)]` per field), so a
//! partially-saved or legacy record stays valid. A file that exists but
//! cannot be parsed is an error, never silently replaced by defaults.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key the preferences record is stored under.
pub const SETTINGS_KEY: &str = "app_settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),

    #[error("settings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("no user configuration directory available")]
    NoConfigDir,
}

/// User preferences for the control panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub enable_notifications: bool,
    pub auto_refresh: bool,
    /// Seconds between automatic refreshes; must be at least 1. The CLI
    /// enforces the bound before saving.
    pub refresh_interval_seconds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_notifications: true,
            auto_refresh: true,
            refresh_interval_seconds: 30,
        }
    }
}

/// File-backed store for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store rooted at `dir`; the record lives in `<dir>/app_settings.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{SETTINGS_KEY}.json")),
        }
    }

    /// Store in the per-user configuration directory.
    pub fn default_location() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dir.join("plantctl")))
    }

    /// Load the persisted record merged over defaults. No prior save means
    /// pure defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the record, creating the store directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_without_prior_save_returns_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.enable_notifications);
        assert!(settings.auto_refresh);
        assert_eq!(settings.refresh_interval_seconds, 30);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        let settings = Settings {
            enable_notifications: false,
            auto_refresh: true,
            refresh_interval_seconds: 45,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn partial_record_merges_over_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        fs::write(
            dir.path().join("app_settings.json"),
            r#"{"auto_refresh":false}"#,
        )
        .unwrap();

        let settings = store.load().unwrap();
        assert!(settings.enable_notifications);
        assert!(!settings.auto_refresh);
        assert_eq!(settings.refresh_interval_seconds, 30);
    }

    #[test]
    fn corrupt_file_is_an_error_not_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        fs::write(dir.path().join("app_settings.json"), "{not json").unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            SettingsError::Corrupt(_)
        ));
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("deeper"));
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.load().unwrap(), Settings::default());
    }
}
