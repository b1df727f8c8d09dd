//! Launcher preferences persistence
//!
//! Stores user preferences in `~/.config/leader-key/settings.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No config directory available")]
    NoConfigDir,

    #[error("Failed to write settings to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Preferences that persist across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Match keys by physical position on a US layout instead of the
    /// characters the active layout produces
    #[serde(default)]
    pub force_standard_layout: bool,

    /// Directory holding `config.json`; `None` uses the default directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::settings_file() else {
            tracing::debug!("No config directory available, using default settings");
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = crate::config_paths::settings_file().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_error = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(io_error)?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Update the layout preference and save
    pub fn set_force_standard_layout(&mut self, force: bool) -> Result<(), SettingsError> {
        self.force_standard_layout = force;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.yaml"));
        assert_eq!(settings, Settings::default());
        assert!(!settings.force_standard_layout);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.yaml");
        let settings = Settings {
            force_standard_layout: true,
            config_dir: Some(PathBuf::from("/tmp/leader")),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "force_standard_layout: true\n").unwrap();
        let settings = Settings::load_from(&path);
        assert!(settings.force_standard_layout);
        assert_eq!(settings.config_dir, None);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "force_standard_layout: [not, a, bool]\n").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
