#![no_std]

//! # Notepad Settings
//!
//! Typed preferences for the notepad editor.
//!
//! ## Philosophy
//!
//! - **Typed settings**: Every preference is a struct field, not a string key
//! - **Defaults baked in**: A missing or partial settings file still yields a full set
//! - **Deterministic**: Settings are serializable and reproducible
//! - **Testable**: All settings logic can be tested independently
//!
//! ## Features
//!
//! - Undo history depth
//! - Window title texts (untitled name, unsaved marker)
//! - File dialog filters
//! - Keyboard shortcuts, validated into an `editor_core::Keymap`
//!
//! ## Example
//!
//! ```ignore
//! use services_settings::{persistence, NotepadSettings};
//!
//! let settings = persistence::load_settings_safe(&bytes);
//! let keymap = settings.keymap()?;
//! ```

pub mod persistence;

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use editor_core::key::DEFAULT_SHORTCUTS;
use editor_core::{Command, KeyChord, KeyChordError, Keymap};
use serde::{Deserialize, Serialize};

/// A file dialog filter such as `Text documents (*.txt)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Label shown in the dialog
    pub label: String,
    /// Glob patterns, e.g. `*.txt`
    pub patterns: Vec<String>,
}

impl FileFilter {
    pub fn new(label: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            label: label.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Whether `file_name` matches one of the patterns
    ///
    /// Only `*` and `*.ext` patterns are understood.
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern.as_str() {
            "*" | "*.*" => true,
            p => match p.strip_prefix("*.") {
                Some(ext) => file_name
                    .rsplit_once('.')
                    .is_some_and(|(_, actual)| actual.eq_ignore_ascii_case(ext)),
                None => p == file_name,
            },
        })
    }
}

/// Editor preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotepadSettings {
    /// Maximum undo depth, 0 for unbounded
    pub history_limit: usize,
    /// Window title for a document without a path
    pub untitled_title: String,
    /// Appended to the file name while there are unsaved changes
    pub unsaved_marker: String,
    /// Filters offered by open/save dialogs, first one selected
    pub file_filters: Vec<FileFilter>,
    /// Command name to chord string
    pub keybindings: BTreeMap<String, String>,
}

impl Default for NotepadSettings {
    fn default() -> Self {
        Self {
            history_limit: editor_core::history::DEFAULT_HISTORY_LIMIT,
            untitled_title: "Untitled".to_string(),
            unsaved_marker: "(unsaved)".to_string(),
            file_filters: vec![
                FileFilter::new("Text documents (*.txt)", &["*.txt"]),
                FileFilter::new("All files (*.*)", &["*.*"]),
            ],
            keybindings: DEFAULT_SHORTCUTS
                .iter()
                .map(|(cmd, chord)| (cmd.name().to_string(), chord.to_string()))
                .collect(),
        }
    }
}

/// Settings that cannot be turned into a working configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A keybinding names a command that does not exist
    UnknownCommand(String),
    /// A keybinding chord does not parse
    InvalidShortcut { command: String, reason: KeyChordError },
    /// Two commands are bound to the same chord
    ConflictingShortcut { chord: String, first: String, second: String },
    /// The untitled title is empty
    EmptyUntitledTitle,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::UnknownCommand(name) => write!(f, "Unknown command in keybindings: {}", name),
            SettingsError::InvalidShortcut { command, reason } => {
                write!(f, "Invalid shortcut for {}: {}", command, reason)
            }
            SettingsError::ConflictingShortcut { chord, first, second } => {
                write!(f, "Shortcut {} bound to both {} and {}", chord, first, second)
            }
            SettingsError::EmptyUntitledTitle => write!(f, "untitled_title must not be empty"),
        }
    }
}

impl core::error::Error for SettingsError {}

impl NotepadSettings {
    /// Builds the keymap described by `keybindings`
    ///
    /// Commands missing from `keybindings` have no shortcut.
    pub fn keymap(&self) -> Result<Keymap, SettingsError> {
        let mut keymap = Keymap::empty();
        for (name, chord_text) in &self.keybindings {
            let command = Command::from_name(name)
                .ok_or_else(|| SettingsError::UnknownCommand(name.clone()))?;
            let chord = KeyChord::parse(chord_text).map_err(|reason| {
                SettingsError::InvalidShortcut {
                    command: name.clone(),
                    reason,
                }
            })?;
            if let Some(existing) = keymap.lookup(&chord) {
                return Err(SettingsError::ConflictingShortcut {
                    chord: chord.to_string(),
                    first: existing.name().to_string(),
                    second: command.name().to_string(),
                });
            }
            keymap.bind(chord, command);
        }
        Ok(keymap)
    }

    /// Checks everything a host relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.untitled_title.trim().is_empty() {
            return Err(SettingsError::EmptyUntitledTitle);
        }
        self.keymap().map(|_| ())
    }
}
