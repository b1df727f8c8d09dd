//! Keyboard input handling
//!
//! Turns raw key presses into the glyphs the rest of the crate compares:
//! - `glyphs`: the canonical key code / glyph table
//! - `normalizer`: layout-aware resolution for navigation
//! - `capture`: key recording for the binding editor
//!
//! # Architecture
//!
//! ```text
//! winit key event → KeyEvent → resolve() → glyph → NavigationController::on_key()
//!                            → capture::translate() → Translation (key recording)
//! ```

pub mod capture;
pub mod glyphs;
pub mod normalizer;
mod types;
mod winit_adapter;

pub use capture::{KeyRecorder, RecordOutcome, Translation};
pub use glyphs::{display_glyph, glyph_for_character, glyph_for_keycode, normalize, KeyEntry};
pub use normalizer::{resolve, KeyNormalizer};
pub use types::{KeyEvent, Modifiers};
pub use winit_adapter::{key_event_from_winit, mac_keycode, UNKNOWN_KEYCODE};
