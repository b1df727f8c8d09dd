//! Canonical key glyph table
//!
//! Maps physical key codes (macOS virtual key codes) to the glyphs used both
//! for displaying a configured key and for comparing keys during navigation.
//!
//! Printable entries cover the US-ANSI keys in unshifted and shifted form, so
//! `"r"` and `"R"` are distinct entries sharing one key code. Special entries
//! cover keys whose `characters` are empty or unprintable (arrows, escape,
//! delete, ...); for those the key code is the only reliable identity.
//!
//! The table is built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Escape: cancels key recording
pub const KEYCODE_ESCAPE: u16 = 0x35;
/// Backspace ("delete" on Mac keyboards)
pub const KEYCODE_DELETE: u16 = 0x33;
pub const KEYCODE_FORWARD_DELETE: u16 = 0x75;

/// A single row of the glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub keycode: u16,
    pub glyph: &'static str,
    /// Human readable name ("left", "escape"); printable keys use their glyph
    pub name: &'static str,
    /// Non-printable key whose glyph is symbolic
    pub special: bool,
    /// Printable entry produced with shift held
    pub shifted: bool,
}

struct SpecialKey {
    keycode: u16,
    glyph: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    /// Raw `characters` strings hosts report for this key
    raw: &'static [&'static str],
}

#[rustfmt::skip]
const SPECIAL_KEYS: &[SpecialKey] = &[
    SpecialKey { keycode: 0x7B, glyph: "←", name: "left", aliases: &["arrowleft"], raw: &["\u{F702}"] },
    SpecialKey { keycode: 0x7C, glyph: "→", name: "right", aliases: &["arrowright"], raw: &["\u{F703}"] },
    SpecialKey { keycode: 0x7D, glyph: "↓", name: "down", aliases: &["arrowdown"], raw: &["\u{F701}"] },
    SpecialKey { keycode: 0x7E, glyph: "↑", name: "up", aliases: &["arrowup"], raw: &["\u{F700}"] },
    SpecialKey { keycode: KEYCODE_ESCAPE, glyph: "⎋", name: "escape", aliases: &["esc"], raw: &["\u{1b}"] },
    SpecialKey { keycode: KEYCODE_DELETE, glyph: "⌫", name: "delete", aliases: &["backspace", "back"], raw: &["\u{7f}", "\u{8}"] },
    SpecialKey { keycode: KEYCODE_FORWARD_DELETE, glyph: "⌦", name: "forwarddelete", aliases: &["del"], raw: &["\u{F728}"] },
    SpecialKey { keycode: 0x30, glyph: "⇥", name: "tab", aliases: &[], raw: &["\t"] },
    SpecialKey { keycode: 0x31, glyph: "␣", name: "space", aliases: &[], raw: &[" "] },
    SpecialKey { keycode: 0x24, glyph: "↵", name: "return", aliases: &["enter"], raw: &["\r", "\n"] },
    SpecialKey { keycode: 0x4C, glyph: "⌤", name: "keypadenter", aliases: &["numenter"], raw: &["\u{3}"] },
    SpecialKey { keycode: 0x73, glyph: "↖", name: "home", aliases: &[], raw: &["\u{F729}"] },
    SpecialKey { keycode: 0x77, glyph: "↘", name: "end", aliases: &[], raw: &["\u{F72B}"] },
    SpecialKey { keycode: 0x74, glyph: "⇞", name: "pageup", aliases: &["pgup"], raw: &["\u{F72C}"] },
    SpecialKey { keycode: 0x79, glyph: "⇟", name: "pagedown", aliases: &["pgdown", "pgdn"], raw: &["\u{F72D}"] },
];

/// US-ANSI printable keys: (keycode, unshifted, shifted)
pub(crate) const US_ANSI_KEYS: &[(u16, &str, &str)] = &[
    (0x00, "a", "A"),
    (0x01, "s", "S"),
    (0x02, "d", "D"),
    (0x03, "f", "F"),
    (0x04, "h", "H"),
    (0x05, "g", "G"),
    (0x06, "z", "Z"),
    (0x07, "x", "X"),
    (0x08, "c", "C"),
    (0x09, "v", "V"),
    (0x0B, "b", "B"),
    (0x0C, "q", "Q"),
    (0x0D, "w", "W"),
    (0x0E, "e", "E"),
    (0x0F, "r", "R"),
    (0x10, "y", "Y"),
    (0x11, "t", "T"),
    (0x12, "1", "!"),
    (0x13, "2", "@"),
    (0x14, "3", "#"),
    (0x15, "4", "$"),
    (0x16, "6", "^"),
    (0x17, "5", "%"),
    (0x18, "=", "+"),
    (0x19, "9", "("),
    (0x1A, "7", "&"),
    (0x1B, "-", "_"),
    (0x1C, "8", "*"),
    (0x1D, "0", ")"),
    (0x1E, "]", "}"),
    (0x1F, "o", "O"),
    (0x20, "u", "U"),
    (0x21, "[", "{"),
    (0x22, "i", "I"),
    (0x23, "p", "P"),
    (0x25, "l", "L"),
    (0x26, "j", "J"),
    (0x27, "'", "\""),
    (0x28, "k", "K"),
    (0x29, ";", ":"),
    (0x2A, "\\", "|"),
    (0x2B, ",", "<"),
    (0x2C, "/", "?"),
    (0x2D, "n", "N"),
    (0x2E, "m", "M"),
    (0x2F, ".", ">"),
    (0x32, "`", "~"),
];

struct GlyphTable {
    entries: Vec<KeyEntry>,
    /// Unshifted printable or special entry per key code
    by_keycode: HashMap<u16, usize>,
    by_glyph: HashMap<&'static str, usize>,
    by_raw: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl GlyphTable {
    fn build() -> Self {
        let mut table = GlyphTable {
            entries: Vec::with_capacity(SPECIAL_KEYS.len() + US_ANSI_KEYS.len() * 2),
            by_keycode: HashMap::new(),
            by_glyph: HashMap::new(),
            by_raw: HashMap::new(),
            by_name: HashMap::new(),
        };

        for special in SPECIAL_KEYS {
            let idx = table.push(KeyEntry {
                keycode: special.keycode,
                glyph: special.glyph,
                name: special.name,
                special: true,
                shifted: false,
            });
            table.by_keycode.insert(special.keycode, idx);
            table.by_name.insert(special.name, idx);
            for alias in special.aliases {
                table.by_name.insert(*alias, idx);
            }
            for raw in special.raw {
                table.by_raw.insert(*raw, idx);
            }
        }

        for &(keycode, unshifted, shifted) in US_ANSI_KEYS {
            let idx = table.push(KeyEntry {
                keycode,
                glyph: unshifted,
                name: unshifted,
                special: false,
                shifted: false,
            });
            table.by_keycode.insert(keycode, idx);
            table.push(KeyEntry {
                keycode,
                glyph: shifted,
                name: shifted,
                special: false,
                shifted: true,
            });
        }

        table
    }

    fn push(&mut self, entry: KeyEntry) -> usize {
        let idx = self.entries.len();
        self.by_glyph.entry(entry.glyph).or_insert(idx);
        self.entries.push(entry);
        idx
    }
}

static TABLE: LazyLock<GlyphTable> = LazyLock::new(GlyphTable::build);

/// Entry for a physical key (special, or the unshifted printable entry)
pub fn entry_for_keycode(keycode: u16) -> Option<&'static KeyEntry> {
    let table = &*TABLE;
    table.by_keycode.get(&keycode).map(|&idx| &table.entries[idx])
}

/// Entry whose glyph is exactly `glyph` (case-sensitive)
pub fn entry_for_glyph(glyph: &str) -> Option<&'static KeyEntry> {
    let table = &*TABLE;
    table.by_glyph.get(glyph).map(|&idx| &table.entries[idx])
}

pub fn glyph_for_keycode(keycode: u16) -> Option<&'static str> {
    entry_for_keycode(keycode).map(|entry| entry.glyph)
}

/// Glyph for a key code only when that key is non-printable
pub fn special_glyph_for_keycode(keycode: u16) -> Option<&'static str> {
    entry_for_keycode(keycode)
        .filter(|entry| entry.special)
        .map(|entry| entry.glyph)
}

/// Canonical glyph for a character string
///
/// Accepts a glyph itself (`"r"`, `"←"`) or the raw text a host reports for a
/// special key (`" "`, `"\t"`, the function-key private-use characters).
/// Case is preserved: `"r"` and `"R"` resolve to different glyphs.
pub fn glyph_for_character(ch: &str) -> Option<&'static str> {
    let table = &*TABLE;
    table
        .by_glyph
        .get(ch)
        .or_else(|| table.by_raw.get(ch))
        .map(|&idx| table.entries[idx].glyph)
}

/// Glyph for a key name such as `"left"`, `"Space"` or `"esc"`
pub fn glyph_for_name(name: &str) -> Option<&'static str> {
    let table = &*TABLE;
    let lower = name.to_ascii_lowercase();
    table
        .by_name
        .get(lower.as_str())
        .map(|&idx| table.entries[idx].glyph)
}

/// The comparison form of a configured or typed key
pub fn normalize(key: &str) -> &str {
    glyph_for_character(key).unwrap_or(key)
}

/// What a key button shows for a configured key
pub fn display_glyph(key: &str) -> &str {
    normalize(key)
}

/// Iterate the whole table in definition order
pub fn entries() -> impl Iterator<Item = &'static KeyEntry> {
    TABLE.entries.iter()
}
