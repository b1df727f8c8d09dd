//! Core input types: KeyEvent and Modifiers

use std::fmt;

/// Modifier flags held during a key press
///
/// Only shift takes part in key resolution; the others are carried so hosts
/// and logs can see the full chord.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1 << 0);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    /// Option on macOS
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Command on macOS
    pub const META: Modifiers = Modifiers(1 << 3);

    /// Build from the individual flags a host reports
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Modifiers(
            (ctrl as u8) | (shift as u8) << 1 | (alt as u8) << 2 | (meta as u8) << 3,
        )
    }

    const fn has(self, flag: Modifiers) -> bool {
        self.0 & flag.0 != 0
    }

    pub const fn ctrl(self) -> bool {
        self.has(Self::CTRL)
    }

    /// Shift decides between the unshifted and shifted glyph of a key
    pub const fn shift(self) -> bool {
        self.has(Self::SHIFT)
    }

    pub const fn alt(self) -> bool {
        self.has(Self::ALT)
    }

    pub const fn meta(self) -> bool {
        self.has(Self::META)
    }

    /// True for a press with no modifier held
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // macOS symbols: ⌃ ⇧ ⌥ ⌘
        let mut out = String::new();
        if self.ctrl() {
            out.push('⌃');
        }
        if self.alt() {
            out.push('⌥');
        }
        if self.shift() {
            out.push('⇧');
        }
        if self.meta() {
            out.push('⌘');
        }
        f.write_str(&out)
    }
}

/// A raw key press as delivered by the host
///
/// `keycode` is the physical key (macOS virtual key code numbering, which is
/// what the glyph and standard-layout tables are keyed by). `characters` is
/// what the active layout produced with all modifiers applied, and
/// `characters_ignoring_modifiers` is the same press with modifiers other
/// than shift stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: u16,
    pub characters: String,
    pub characters_ignoring_modifiers: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create an event for a key that produces the same text with or without modifiers
    pub fn new(keycode: u16, characters: impl Into<String>) -> Self {
        let characters = characters.into();
        Self {
            keycode,
            characters_ignoring_modifiers: characters.clone(),
            characters,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set the modifier-stripped text (builder pattern)
    pub fn ignoring_modifiers(mut self, characters: impl Into<String>) -> Self {
        self.characters_ignoring_modifiers = characters.into();
        self
    }

    /// Set modifier flags (builder pattern)
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn shift(&self) -> bool {
        self.modifiers.shift()
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{} ", self.modifiers)?;
        }
        write!(f, "keycode=0x{:02X} chars={:?}", self.keycode, self.characters)
    }
}
