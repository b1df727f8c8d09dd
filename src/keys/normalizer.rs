//! Layout-aware resolution of a raw key event to a single glyph
//!
//! Special keys (arrows, escape, delete, ...) always resolve through the glyph
//! table by key code. Everything else resolves either to what the active
//! layout produced, or, in standard-layout mode, to what the same physical key
//! would produce on a US QWERTY keyboard. Shift state is preserved in both
//! modes, so `r` and `R` stay distinct.

use unicode_segmentation::UnicodeSegmentation;

use super::glyphs::{self, US_ANSI_KEYS};
use super::types::KeyEvent;

/// Resolves key events using a fixed layout preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyNormalizer {
    pub force_standard_layout: bool,
}

impl KeyNormalizer {
    pub fn new(force_standard_layout: bool) -> Self {
        Self {
            force_standard_layout,
        }
    }

    pub fn resolve(&self, event: &KeyEvent) -> Option<String> {
        resolve(event, self.force_standard_layout)
    }
}

/// Resolve a key event to the glyph used for matching
///
/// Returns `None` when the event carries no usable text and the key code is
/// unknown (e.g. a bare modifier press).
pub fn resolve(event: &KeyEvent, force_standard_layout: bool) -> Option<String> {
    if let Some(glyph) = glyphs::special_glyph_for_keycode(event.keycode) {
        tracing::trace!("{} resolved by key code to {}", event, glyph);
        return Some(glyph.to_string());
    }

    if force_standard_layout {
        if let Some(ch) = standard_character(event.keycode, event.shift()) {
            tracing::trace!("{} resolved by standard layout to {}", event, ch);
            return Some(ch.to_string());
        }
    }

    layout_character(event)
}

/// US QWERTY character for a physical key, honoring shift
pub fn standard_character(keycode: u16, shift: bool) -> Option<&'static str> {
    US_ANSI_KEYS
        .iter()
        .find(|(code, _, _)| *code == keycode)
        .map(|&(_, unshifted, shifted)| if shift { shifted } else { unshifted })
}

/// Character the active layout produced for this press
fn layout_character(event: &KeyEvent) -> Option<String> {
    let text = if event.characters_ignoring_modifiers.is_empty() {
        event.characters.as_str()
    } else {
        event.characters_ignoring_modifiers.as_str()
    };

    let first = text.graphemes(true).next()?;

    // Some hosts report the unshifted letter with the shift flag set
    let cased = if event.shift() && first.chars().all(char::is_lowercase) {
        first.to_uppercase()
    } else {
        first.to_string()
    };

    Some(glyphs::normalize(&cased).to_string())
}
