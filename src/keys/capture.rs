//! Key recording for the key-binding editor
//!
//! Translates a raw key event into what a "press a key to bind" control should
//! do with it. Recording is layout-agnostic: it keeps what the user pressed
//! and never consults the configured tree.

use unicode_segmentation::UnicodeSegmentation;

use super::glyphs::{self, KEYCODE_DELETE, KEYCODE_ESCAPE, KEYCODE_FORWARD_DELETE};
use super::types::KeyEvent;

/// What a recording control should do with a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Abort recording and restore the previous value
    Cancel,
    /// Remove the binding
    Clear,
    /// Record this glyph
    Set(String),
    /// Not a recordable key; let the event propagate
    Ignore,
}

/// Translate a key event, first rule wins:
/// escape cancels, delete/forward-delete clear, a single letter is recorded
/// as typed, special keys record their glyph, anything else records the first
/// character of the modifier-stripped text.
pub fn translate(event: &KeyEvent) -> Translation {
    match event.keycode {
        KEYCODE_ESCAPE => return Translation::Cancel,
        KEYCODE_DELETE | KEYCODE_FORWARD_DELETE => return Translation::Clear,
        _ => {}
    }

    let mut graphemes = event.characters.graphemes(true);
    if let (Some(single), None) = (graphemes.next(), graphemes.next()) {
        if single.chars().all(char::is_alphabetic) {
            return Translation::Set(single.to_string());
        }
    }

    if let Some(glyph) = glyphs::special_glyph_for_keycode(event.keycode) {
        return Translation::Set(glyph.to_string());
    }

    let text = if event.characters_ignoring_modifiers.is_empty() {
        &event.characters
    } else {
        &event.characters_ignoring_modifiers
    };
    match text.graphemes(true).next() {
        Some(first) => Translation::Set(first.to_string()),
        None => Translation::Ignore,
    }
}

/// Translate and dispatch to exactly one callback
///
/// Clearing is reported as `on_set("")`. Returns `false` only for
/// [`Translation::Ignore`], in which case the caller must propagate the event.
pub fn handle(event: &KeyEvent, on_set: impl FnOnce(String), on_cancel: impl FnOnce()) -> bool {
    handle_with_clear(event, on_set, on_cancel, None::<fn()>)
}

/// Like [`handle`], with a dedicated clear callback when one is supplied
pub fn handle_with_clear(
    event: &KeyEvent,
    on_set: impl FnOnce(String),
    on_cancel: impl FnOnce(),
    on_clear: Option<impl FnOnce()>,
) -> bool {
    match translate(event) {
        Translation::Cancel => {
            on_cancel();
            true
        }
        Translation::Clear => {
            match on_clear {
                Some(on_clear) => on_clear(),
                None => on_set(String::new()),
            }
            true
        }
        Translation::Set(value) => {
            on_set(value);
            true
        }
        Translation::Ignore => false,
    }
}

/// Result of feeding an event to a [`KeyRecorder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Recording finished; `before` is the value when recording began
    Recorded { before: String, after: String },
    /// The recorder is idle or the key is not recordable
    NotHandled,
}

/// State of a single key button: its value and whether it is listening
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRecorder {
    value: String,
    /// Value captured by `begin`, present while recording
    previous: Option<String>,
}

impl KeyRecorder {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            previous: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Glyph to render on the button
    pub fn display(&self) -> &str {
        glyphs::display_glyph(&self.value)
    }

    pub fn is_recording(&self) -> bool {
        self.previous.is_some()
    }

    /// Start listening for the next key
    pub fn begin(&mut self) {
        self.previous = Some(self.value.clone());
    }

    pub fn handle(&mut self, event: &KeyEvent) -> RecordOutcome {
        let Some(previous) = self.previous.clone() else {
            return RecordOutcome::NotHandled;
        };

        self.value = match translate(event) {
            Translation::Cancel => previous,
            Translation::Clear => String::new(),
            Translation::Set(value) => value,
            Translation::Ignore => return RecordOutcome::NotHandled,
        };
        self.finish()
    }

    /// Stop listening without a key (focus moved elsewhere)
    pub fn abort(&mut self) -> RecordOutcome {
        if self.is_recording() {
            self.finish()
        } else {
            RecordOutcome::NotHandled
        }
    }

    fn finish(&mut self) -> RecordOutcome {
        let before = self.previous.take().unwrap_or_default();
        tracing::debug!("Key recorded: {:?} -> {:?}", before, self.value);
        RecordOutcome::Recorded {
            before,
            after: self.value.clone(),
        }
    }
}
