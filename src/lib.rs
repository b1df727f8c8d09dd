//! Leader Key - keybinding tree, layout-aware key input and sequence navigation
//!
//! A leader sequence starts with an activation shortcut, then walks a tree of
//! groups one key at a time until an action is selected. This crate provides
//! the tree model and its validation, key normalization across keyboard
//! layouts, and the navigation state machine. Running actions is left to the
//! host.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keys;
pub mod navigation;
pub mod settings;
pub mod tracing;

// Re-export commonly used types
pub use config::{Action, ActionType, Group, KeyItem, UserConfig, ValidationError};
pub use keys::{KeyEvent, KeyNormalizer, Modifiers};
pub use navigation::{KeyOutcome, NavigationController, NavigationState};
pub use settings::Settings;
