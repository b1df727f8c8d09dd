//! Centralized configuration paths for leader-key
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/leader-key/`
//! - Windows: `%APPDATA%\leader-key\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "leader-key";
/// Base name of the daily-rotated log file
pub const LOG_FILE_NAME: &str = "leader.log";

/// Base config directory for leader-key
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/leader-key`
///   - Else: `~/.config/leader-key`
///
/// Windows:
///   - `%APPDATA%\leader-key`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/leader-key/settings.yaml`
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.yaml"))
}

/// `~/.config/leader-key/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "No config directory available")
    })?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
