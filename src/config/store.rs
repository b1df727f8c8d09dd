//! User configuration persistence
//!
//! Stores the keybinding tree in `config.json` under the configured directory
//! (default `~/.config/leader-key/`). Hard failures are reported through the
//! alert handler and leave an empty root in place.

use std::fs;
use std::path::{Path, PathBuf};

use super::alert::{AlertHandler, AlertStyle, LogAlertHandler};
use super::tree::Group;
use super::validator::{validate, ValidationError};
use super::ConfigError;
use crate::settings::Settings;

/// Configuration written on first launch
pub const DEFAULT_CONFIG_JSON: &str = include_str!("default-config.json");

const CONFIG_FILE_NAME: &str = "config.json";

/// The bundled default tree
pub fn default_config() -> Result<Group, ConfigError> {
    serde_json::from_str(DEFAULT_CONFIG_JSON).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(CONFIG_FILE_NAME),
        source,
    })
}

/// Read and parse a tree from a JSON file
pub fn read_config(path: &Path) -> Result<Group, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a tree as pretty JSON
pub fn write_config(path: &Path, root: &Group) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(root).map_err(ConfigError::Serialize)?;
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loaded keybinding tree plus its validation state
pub struct UserConfig<A: AlertHandler = LogAlertHandler> {
    settings: Settings,
    settings_path: Option<PathBuf>,
    default_dir: PathBuf,
    root: Group,
    validation_errors: Vec<ValidationError>,
    alerts: A,
}

impl<A: AlertHandler> UserConfig<A> {
    /// Use the standard config directory as the default location
    pub fn new(settings: Settings, alerts: A) -> Result<Self, ConfigError> {
        let default_dir = crate::config_paths::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let config = Self::with_default_dir(settings, default_dir, alerts);
        Ok(match crate::config_paths::settings_file() {
            Some(path) => config.with_settings_path(path),
            None => config,
        })
    }

    pub fn with_default_dir(settings: Settings, default_dir: PathBuf, alerts: A) -> Self {
        Self {
            settings,
            settings_path: None,
            default_dir,
            root: Group::empty_root(),
            validation_errors: Vec::new(),
            alerts,
        }
    }

    /// Where settings changes made while loading are written back
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }

    /// The directory currently holding `config.json`
    pub fn directory(&self) -> &Path {
        self.settings
            .config_dir
            .as_deref()
            .unwrap_or(self.default_dir.as_path())
    }

    pub fn path(&self) -> PathBuf {
        self.directory().join(CONFIG_FILE_NAME)
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Make sure a config file exists, then load it
    ///
    /// A missing custom directory is reported and the default directory is
    /// used instead. A missing file is replaced by the bundled default.
    pub fn ensure_and_load(&mut self) {
        self.ensure_directory();

        let dir = self.directory().to_path_buf();
        if let Err(e) = fs::create_dir_all(&dir) {
            self.alerts.show_alert(
                AlertStyle::Critical,
                &format!("Failed to create config directory {}: {}", dir.display(), e),
            );
            self.set_root(Group::empty_root());
            return;
        }

        if !self.exists() {
            let path = self.path();
            tracing::info!("Writing default config to {}", path.display());
            if let Err(e) = fs::write(&path, DEFAULT_CONFIG_JSON) {
                self.alerts.show_alert(
                    AlertStyle::Critical,
                    &format!("Failed to write default config to {}: {}", path.display(), e),
                );
            }
        }

        self.reload();
    }

    fn ensure_directory(&mut self) {
        let Some(custom) = self.settings.config_dir.clone() else {
            return;
        };
        if custom.is_dir() {
            return;
        }

        let choice = self.alerts.show_alert_with_buttons(
            AlertStyle::Warning,
            &format!("Config directory does not exist: {}", custom.display()),
            &format!(
                "Leader Key can use the default directory at {} or create the missing one.",
                self.default_dir.display()
            ),
            &["Use Default Directory", "Create Directory"],
        );

        if choice == 1 {
            tracing::info!("Keeping custom config directory {}", custom.display());
            return;
        }

        tracing::warn!(
            "Config directory {} does not exist, using {}",
            custom.display(),
            self.default_dir.display()
        );
        self.settings.config_dir = None;

        if let Some(path) = &self.settings_path {
            match self.settings.save_to(path) {
                Ok(()) => tracing::info!("Reset config directory in {}", path.display()),
                Err(e) => tracing::warn!("Failed to save settings to {}: {}", path.display(), e),
            }
        }
    }

    /// Re-read `config.json`, falling back to an empty root on failure
    pub fn reload(&mut self) {
        let path = self.path();
        let root = match read_config(&path) {
            Ok(root) => {
                tracing::info!("Loaded config from {}", path.display());
                root
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.alerts.show_alert(AlertStyle::Warning, &e.to_string());
                Group::empty_root()
            }
        };
        self.set_root(root);
    }

    /// Replace the tree with a new snapshot and revalidate it
    pub fn set_root(&mut self, root: Group) {
        self.root = root;
        self.validation_errors = validate(&self.root);
        if !self.validation_errors.is_empty() {
            tracing::debug!(
                "Config has {} validation issue(s)",
                self.validation_errors.len()
            );
        }
    }

    /// Write the tree back to disk
    ///
    /// Validation issues are kept for display and do not block saving.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        self.validation_errors = validate(&self.root);
        let path = self.path();
        if let Err(e) = write_config(&path, &self.root) {
            self.alerts.show_alert(AlertStyle::Critical, &e.to_string());
            return Err(e);
        }
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_and_validates() {
        let root = default_config().unwrap();
        assert!(root.key.is_none());
        assert!(!root.actions.is_empty());
        assert!(validate(&root).is_empty());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let root = default_config().unwrap();
        write_config(&path, &root).unwrap();
        assert_eq!(read_config(&path).unwrap(), root);
    }
}
