//! Adapter to convert winit key events to our KeyEvent type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::types::{KeyEvent, Modifiers};

/// Key code used when the physical key has no macOS equivalent
pub const UNKNOWN_KEYCODE: u16 = 0xFFFF;

/// Convert winit key event data to our KeyEvent type
///
/// `key_without_modifiers` is the logical key with modifiers other than shift
/// removed (winit exposes it through the platform `KeyEventExtModifierSupplement`).
/// Returns None if neither the physical key nor the text can be used.
pub fn key_event_from_winit(
    logical_key: &Key,
    key_without_modifiers: &Key,
    physical_key: PhysicalKey,
    modifiers: ModifiersState,
) -> Option<KeyEvent> {
    let keycode = match physical_key {
        PhysicalKey::Code(code) => mac_keycode(code),
        PhysicalKey::Unidentified(_) => None,
    };

    let characters = key_text(logical_key);
    if keycode.is_none() && characters.is_empty() {
        return None;
    }

    Some(KeyEvent {
        keycode: keycode.unwrap_or(UNKNOWN_KEYCODE),
        characters,
        characters_ignoring_modifiers: key_text(key_without_modifiers),
        modifiers: Modifiers::new(
            modifiers.control_key(),
            modifiers.shift_key(),
            modifiers.alt_key(),
            modifiers.super_key(),
        ),
    })
}

/// Text a logical key produces, in the form AppKit would report it
fn key_text(key: &Key) -> String {
    match key {
        Key::Character(s) => s.to_string(),
        Key::Named(named) => match named {
            NamedKey::Space => " ".to_string(),
            NamedKey::Enter => "\r".to_string(),
            NamedKey::Tab => "\t".to_string(),
            NamedKey::Escape => "\u{1b}".to_string(),
            NamedKey::Backspace => "\u{7f}".to_string(),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

/// macOS virtual key code for a physical key position
pub fn mac_keycode(code: WinitKeyCode) -> Option<u16> {
    let keycode = match code {
        WinitKeyCode::KeyA => 0x00,
        WinitKeyCode::KeyS => 0x01,
        WinitKeyCode::KeyD => 0x02,
        WinitKeyCode::KeyF => 0x03,
        WinitKeyCode::KeyH => 0x04,
        WinitKeyCode::KeyG => 0x05,
        WinitKeyCode::KeyZ => 0x06,
        WinitKeyCode::KeyX => 0x07,
        WinitKeyCode::KeyC => 0x08,
        WinitKeyCode::KeyV => 0x09,
        WinitKeyCode::IntlBackslash => 0x0A,
        WinitKeyCode::KeyB => 0x0B,
        WinitKeyCode::KeyQ => 0x0C,
        WinitKeyCode::KeyW => 0x0D,
        WinitKeyCode::KeyE => 0x0E,
        WinitKeyCode::KeyR => 0x0F,
        WinitKeyCode::KeyY => 0x10,
        WinitKeyCode::KeyT => 0x11,
        WinitKeyCode::Digit1 => 0x12,
        WinitKeyCode::Digit2 => 0x13,
        WinitKeyCode::Digit3 => 0x14,
        WinitKeyCode::Digit4 => 0x15,
        WinitKeyCode::Digit6 => 0x16,
        WinitKeyCode::Digit5 => 0x17,
        WinitKeyCode::Equal => 0x18,
        WinitKeyCode::Digit9 => 0x19,
        WinitKeyCode::Digit7 => 0x1A,
        WinitKeyCode::Minus => 0x1B,
        WinitKeyCode::Digit8 => 0x1C,
        WinitKeyCode::Digit0 => 0x1D,
        WinitKeyCode::BracketRight => 0x1E,
        WinitKeyCode::KeyO => 0x1F,
        WinitKeyCode::KeyU => 0x20,
        WinitKeyCode::BracketLeft => 0x21,
        WinitKeyCode::KeyI => 0x22,
        WinitKeyCode::KeyP => 0x23,
        WinitKeyCode::Enter => 0x24,
        WinitKeyCode::KeyL => 0x25,
        WinitKeyCode::KeyJ => 0x26,
        WinitKeyCode::Quote => 0x27,
        WinitKeyCode::KeyK => 0x28,
        WinitKeyCode::Semicolon => 0x29,
        WinitKeyCode::Backslash => 0x2A,
        WinitKeyCode::Comma => 0x2B,
        WinitKeyCode::Slash => 0x2C,
        WinitKeyCode::KeyN => 0x2D,
        WinitKeyCode::KeyM => 0x2E,
        WinitKeyCode::Period => 0x2F,
        WinitKeyCode::Tab => 0x30,
        WinitKeyCode::Space => 0x31,
        WinitKeyCode::Backquote => 0x32,
        WinitKeyCode::Backspace => 0x33,
        WinitKeyCode::Escape => 0x35,
        WinitKeyCode::NumpadEnter => 0x4C,
        WinitKeyCode::Home => 0x73,
        WinitKeyCode::PageUp => 0x74,
        WinitKeyCode::Delete => 0x75,
        WinitKeyCode::End => 0x77,
        WinitKeyCode::PageDown => 0x79,
        WinitKeyCode::ArrowLeft => 0x7B,
        WinitKeyCode::ArrowRight => 0x7C,
        WinitKeyCode::ArrowDown => 0x7D,
        WinitKeyCode::ArrowUp => 0x7E,
        _ => return None,
    };
    Some(keycode)
}
