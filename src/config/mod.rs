//! Keybinding configuration
//!
//! - `tree`: the Group/Action data model and its JSON form
//! - `validator`: structural checks reported as data, plus path lookup
//! - `store`: loading and saving `config.json` with alert reporting
//!
//! Load failures are reported through an [`AlertHandler`] and fall back to an
//! empty root. Validation problems are never alerted; they are kept as
//! [`ValidationError`] values for inline display.

mod alert;
mod store;
mod tree;
mod validator;

use std::path::PathBuf;

use thiserror::Error;

pub use alert::{AlertHandler, AlertStyle, LogAlertHandler};
pub use store::{default_config, read_config, write_config, UserConfig, DEFAULT_CONFIG_JSON};
pub use tree::{Action, ActionType, Group, KeyItem, Path};
pub use validator::{
    error_for, errors_at, find_item, validate, ItemRef, ValidationError, ValidationErrorType,
};

/// Errors that can occur when loading or saving the keybinding tree
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config directory available")]
    NoConfigDir,

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Unknown action type: {0}")]
    UnknownActionType(String),
}
