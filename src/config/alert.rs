//! Alert reporting for hard configuration failures

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertStyle {
    Informational,
    Warning,
    Critical,
}

impl fmt::Display for AlertStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStyle::Informational => write!(f, "info"),
            AlertStyle::Warning => write!(f, "warning"),
            AlertStyle::Critical => write!(f, "critical"),
        }
    }
}

/// Presents alerts to the user
///
/// Only missing directories and unreadable files go through here; validation
/// issues are shown inline instead.
pub trait AlertHandler {
    fn show_alert(&mut self, style: AlertStyle, message: &str);

    /// Ask a question; returns the index of the chosen button
    fn show_alert_with_buttons(
        &mut self,
        style: AlertStyle,
        message: &str,
        informative_text: &str,
        buttons: &[&str],
    ) -> usize;
}

/// Reports alerts through tracing and always picks the first button
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertHandler;

impl AlertHandler for LogAlertHandler {
    fn show_alert(&mut self, style: AlertStyle, message: &str) {
        match style {
            AlertStyle::Informational => tracing::info!("{}", message),
            AlertStyle::Warning => tracing::warn!("{}", message),
            AlertStyle::Critical => tracing::error!("{}", message),
        }
    }

    fn show_alert_with_buttons(
        &mut self,
        style: AlertStyle,
        message: &str,
        informative_text: &str,
        buttons: &[&str],
    ) -> usize {
        self.show_alert(style, &format!("{} ({})", message, informative_text));
        if let Some(first) = buttons.first() {
            tracing::info!("Choosing \"{}\"", first);
        }
        0
    }
}
