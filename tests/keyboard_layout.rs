//! Keyboard layout resolution tests
//!
//! Tests that key events resolve per the active layout by default, per US
//! QWERTY position when forced, and that special keys ignore the setting.

use leader_key::keys::{resolve, KeyEvent, KeyNormalizer, Modifiers};

fn event(keycode: u16, characters: &str) -> KeyEvent {
    KeyEvent::new(keycode, characters).ignoring_modifiers(characters)
}

// ========================================================================
// Alternate Layout Tests
// ========================================================================

#[test]
fn test_azerty_uses_layout_character() {
    // The QWERTY "a" position produces "q" on AZERTY
    assert_eq!(resolve(&event(0x00, "q"), false).as_deref(), Some("q"));
}

#[test]
fn test_azerty_forced_to_standard_layout() {
    assert_eq!(resolve(&event(0x00, "q"), true).as_deref(), Some("a"));
}

#[test]
fn test_colemak_uses_layout_character() {
    // The QWERTY "s" position produces "r" on Colemak
    assert_eq!(resolve(&event(0x01, "r"), false).as_deref(), Some("r"));
}

#[test]
fn test_colemak_forced_to_standard_layout() {
    assert_eq!(resolve(&event(0x01, "r"), true).as_deref(), Some("s"));
}

// ========================================================================
// Case Sensitivity Tests
// ========================================================================

#[test]
fn test_case_sensitivity_with_layout() {
    let lower = resolve(&event(0x0F, "r"), false);
    let upper = resolve(&event(0x0F, "R").with_modifiers(Modifiers::SHIFT), false);
    assert_eq!(lower.as_deref(), Some("r"));
    assert_eq!(upper.as_deref(), Some("R"));
    assert_ne!(lower, upper);
}

#[test]
fn test_case_sensitivity_with_standard_layout() {
    let lower = resolve(&event(0x0F, "r"), true);
    let upper = resolve(&event(0x0F, "R").with_modifiers(Modifiers::SHIFT), true);
    assert_eq!(lower.as_deref(), Some("r"));
    assert_eq!(upper.as_deref(), Some("R"));
    assert_ne!(lower, upper);
}

#[test]
fn test_standard_layout_shifted_digit() {
    let shifted = event(0x12, "!").with_modifiers(Modifiers::SHIFT);
    assert_eq!(resolve(&shifted, true).as_deref(), Some("!"));
}

// ========================================================================
// Special Key Tests
// ========================================================================

#[test]
fn test_special_keys_ignore_layout_setting() {
    for force in [false, true] {
        assert_eq!(resolve(&event(0x7B, ""), force).as_deref(), Some("←"));
        assert_eq!(resolve(&event(0x35, "\u{1b}"), force).as_deref(), Some("⎋"));
        assert_eq!(resolve(&event(0x31, " "), force).as_deref(), Some("␣"));
        assert_eq!(resolve(&event(0x30, "\t"), force).as_deref(), Some("⇥"));
        assert_eq!(resolve(&event(0x24, "\r"), force).as_deref(), Some("↵"));
    }
}

#[test]
fn test_normalizer_matches_free_function() {
    let events = [event(0x00, "q"), event(0x7E, ""), event(0x0F, "r")];
    for force in [false, true] {
        let normalizer = KeyNormalizer::new(force);
        for e in &events {
            assert_eq!(normalizer.resolve(e), resolve(e, force));
        }
    }
}
