//! Keyboard shortcuts

use crate::Command;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Platform-independent key combination such as `Ctrl+Shift+S`
///
/// Letter keys are stored upper-case so `Ctrl+s` and `Ctrl+S` are the same
/// chord; shift is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Error parsing a chord string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChordError {
    Empty,
    UnknownModifier(String),
    InvalidKey(String),
}

impl fmt::Display for KeyChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyChordError::Empty => write!(f, "Empty key chord"),
            KeyChordError::UnknownModifier(m) => write!(f, "Unknown modifier: {}", m),
            KeyChordError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
        }
    }
}

impl core::error::Error for KeyChordError {}

impl KeyChord {
    pub fn new(key: char) -> Self {
        Self {
            key: key.to_ascii_uppercase(),
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn ctrl_shift(key: char) -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::new(key)
        }
    }

    /// Parse `Modifier+...+Key`, modifiers case-insensitive
    pub fn parse(text: &str) -> Result<Self, KeyChordError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(KeyChordError::Empty);
        }

        let mut parts: alloc::vec::Vec<&str> = text.split('+').map(str::trim).collect();
        let key_part = parts.pop().unwrap_or_default();

        let mut chars = key_part.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => c,
            _ => return Err(KeyChordError::InvalidKey(key_part.to_string())),
        };

        let mut chord = Self::new(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" => chord.alt = true,
                _ => return Err(KeyChordError::UnknownModifier(modifier.to_string())),
            }
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Chord to command table
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: BTreeMap<KeyChord, Command>,
}

impl Keymap {
    /// An empty keymap with no bindings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bind `chord` to `command`, replacing any previous binding of the chord
    pub fn bind(&mut self, chord: KeyChord, command: Command) {
        self.bindings.insert(chord, command);
    }

    /// Remove every chord bound to `command`
    pub fn unbind_command(&mut self, command: Command) {
        self.bindings.retain(|_, bound| *bound != command);
    }

    pub fn lookup(&self, chord: &KeyChord) -> Option<Command> {
        self.bindings.get(chord).copied()
    }

    /// First chord bound to `command`, for menu hints
    pub fn chord_for(&self, command: Command) -> Option<KeyChord> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == command)
            .map(|(chord, _)| *chord)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Default shortcut strings, by command
pub const DEFAULT_SHORTCUTS: [(Command, &str); 5] = [
    (Command::Open, "Ctrl+O"),
    (Command::Save, "Ctrl+S"),
    (Command::SaveAs, "Ctrl+Shift+S"),
    (Command::Undo, "Ctrl+Z"),
    (Command::Redo, "Ctrl+Y"),
];

impl Keymap {
    /// Standard bindings: Ctrl+O, Ctrl+S, Ctrl+Shift+S, Ctrl+Z, Ctrl+Y
    pub fn standard() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyChord::ctrl('O'), Command::Open);
        keymap.bind(KeyChord::ctrl('S'), Command::Save);
        keymap.bind(KeyChord::ctrl_shift('S'), Command::SaveAs);
        keymap.bind(KeyChord::ctrl('Z'), Command::Undo);
        keymap.bind(KeyChord::ctrl('Y'), Command::Redo);
        keymap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_parse_simple() {
        assert_eq!(KeyChord::parse("Ctrl+O"), Ok(KeyChord::ctrl('O')));
        assert_eq!(KeyChord::parse("ctrl+o"), Ok(KeyChord::ctrl('O')));
        assert_eq!(KeyChord::parse("Ctrl + Shift + s"), Ok(KeyChord::ctrl_shift('S')));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(KeyChord::parse("  "), Err(KeyChordError::Empty));
        assert_eq!(
            KeyChord::parse("Hyper+S"),
            Err(KeyChordError::UnknownModifier("Hyper".into()))
        );
        assert_eq!(
            KeyChord::parse("Ctrl+Enter"),
            Err(KeyChordError::InvalidKey("Enter".into()))
        );
        assert_eq!(KeyChord::parse("Ctrl+"), Err(KeyChordError::InvalidKey("".into())));
    }

    #[test]
    fn test_display_roundtrip() {
        let chord = KeyChord::ctrl_shift('S');
        assert_eq!(format!("{}", chord), "Ctrl+Shift+S");
        assert_eq!(KeyChord::parse(&format!("{}", chord)), Ok(chord));
    }

    #[test]
    fn test_standard_keymap() {
        let keymap = Keymap::standard();
        assert_eq!(keymap.lookup(&KeyChord::ctrl('Z')), Some(Command::Undo));
        assert_eq!(keymap.lookup(&KeyChord::ctrl('Y')), Some(Command::Redo));
        assert_eq!(keymap.lookup(&KeyChord::ctrl('S')), Some(Command::Save));
        assert_eq!(keymap.lookup(&KeyChord::ctrl_shift('S')), Some(Command::SaveAs));
        assert_eq!(keymap.lookup(&KeyChord::new('Z')), None);
        assert_eq!(keymap.chord_for(Command::Close), None);
    }

    #[test]
    fn test_standard_matches_default_shortcuts() {
        let keymap = Keymap::standard();
        for (command, text) in DEFAULT_SHORTCUTS {
            let chord = KeyChord::parse(text).unwrap();
            assert_eq!(keymap.lookup(&chord), Some(command));
        }
    }

    #[test]
    fn test_rebind() {
        let mut keymap = Keymap::standard();
        keymap.unbind_command(Command::Redo);
        keymap.bind(KeyChord::ctrl_shift('Z'), Command::Redo);

        assert_eq!(keymap.lookup(&KeyChord::ctrl('Y')), None);
        assert_eq!(keymap.chord_for(Command::Redo), Some(KeyChord::ctrl_shift('Z')));
        assert_eq!(keymap.len(), 5);
    }
}
