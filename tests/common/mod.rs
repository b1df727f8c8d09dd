//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use leader_key::config::{AlertHandler, AlertStyle};
use leader_key::{Action, ActionType, Group, KeyItem};

/// Application action with the given key
pub fn app(key: &str) -> KeyItem {
    Action::new(key, ActionType::Application, "/Applications/Safari.app").into()
}

/// URL action with the given key and value
pub fn url(key: &str, value: &str) -> KeyItem {
    Action::new(key, ActionType::Url, value).into()
}

/// Command action with the given key and value
pub fn command(key: &str, value: &str) -> KeyItem {
    Action::new(key, ActionType::Command, value).into()
}

/// Group with the given key and children
pub fn group(key: &str, actions: Vec<KeyItem>) -> KeyItem {
    Group::new(key, actions).into()
}

/// Action with no key at all
pub fn keyless_action() -> KeyItem {
    Action {
        key: None,
        action_type: ActionType::Command,
        value: "true".to_string(),
        label: None,
    }
    .into()
}

/// Records alerts instead of showing them
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    pub shown: Vec<(AlertStyle, String)>,
    /// Button index returned from `show_alert_with_buttons`
    pub button: usize,
}

impl RecordingAlerts {
    pub fn choosing(button: usize) -> Self {
        Self {
            shown: Vec::new(),
            button,
        }
    }

    pub fn count(&self) -> usize {
        self.shown.len()
    }

    pub fn reset(&mut self) {
        self.shown.clear();
    }
}

impl AlertHandler for RecordingAlerts {
    fn show_alert(&mut self, style: AlertStyle, message: &str) {
        self.shown.push((style, message.to_string()));
    }

    fn show_alert_with_buttons(
        &mut self,
        style: AlertStyle,
        message: &str,
        _informative_text: &str,
        _buttons: &[&str],
    ) -> usize {
        self.shown.push((style, message.to_string()));
        self.button
    }
}
