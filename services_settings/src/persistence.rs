//! Settings persistence layer
//!
//! This module handles loading and saving the settings file.
//! The file is versioned JSON; unknown versions are rejected rather than guessed at.

extern crate alloc;

use crate::NotepadSettings;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// On-disk settings container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    #[serde(default)]
    pub settings: NotepadSettings,
}

impl SettingsFile {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(settings: NotepadSettings) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            settings,
        }
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new(NotepadSettings::default())
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur during persistence operations
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// Failed to serialize settings
    SerializationFailed(String),
    /// Failed to deserialize settings
    DeserializationFailed(String),
    /// Unsupported settings version
    UnsupportedVersion(u32),
}

impl core::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PersistenceError::SerializationFailed(msg) => {
                write!(f, "Failed to serialize settings: {}", msg)
            }
            PersistenceError::DeserializationFailed(msg) => {
                write!(f, "Failed to deserialize settings: {}", msg)
            }
            PersistenceError::UnsupportedVersion(version) => {
                write!(f, "Unsupported settings version: {}", version)
            }
        }
    }
}

impl core::error::Error for PersistenceError {}

/// Serializes settings to pretty JSON bytes
pub fn serialize_settings(settings: &NotepadSettings) -> PersistenceResult<Vec<u8>> {
    serde_json::to_vec_pretty(&SettingsFile::new(settings.clone()))
        .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Deserializes settings from JSON bytes
pub fn deserialize_settings(bytes: &[u8]) -> PersistenceResult<NotepadSettings> {
    let file: SettingsFile = serde_json::from_slice(bytes)
        .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;

    if file.version != SettingsFile::CURRENT_VERSION {
        return Err(PersistenceError::UnsupportedVersion(file.version));
    }

    Ok(file.settings)
}

/// Attempts to load settings from bytes, falling back to defaults on error
pub fn load_settings_safe(bytes: &[u8]) -> NotepadSettings {
    deserialize_settings(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_creation() {
        let file = SettingsFile::default();
        assert_eq!(file.version, SettingsFile::CURRENT_VERSION);
        assert_eq!(file.settings, NotepadSettings::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut settings = NotepadSettings::default();
        settings.history_limit = 7;
        settings.unsaved_marker = "*".to_string();

        let bytes = serialize_settings(&settings).unwrap();
        let loaded = deserialize_settings(&bytes).unwrap();

        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let json = r#"{ "version": 1, "settings": { "history_limit": 5 } }"#;
        let settings = deserialize_settings(json.as_bytes()).unwrap();

        assert_eq!(settings.history_limit, 5);
        assert_eq!(settings.untitled_title, "Untitled");
        assert_eq!(settings.keybindings, NotepadSettings::default().keybindings);
    }

    #[test]
    fn test_version_only_file() {
        let settings = deserialize_settings(br#"{ "version": 1 }"#).unwrap();
        assert_eq!(settings, NotepadSettings::default());
    }

    #[test]
    fn test_deterministic_serialization() {
        let settings = NotepadSettings::default();
        let bytes1 = serialize_settings(&settings).unwrap();
        let bytes2 = serialize_settings(&settings).unwrap();
        assert_eq!(bytes1, bytes2);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let result = deserialize_settings(b"{ invalid json }");
        match result {
            Err(PersistenceError::DeserializationFailed(_)) => {}
            _ => panic!("Expected DeserializationFailed error"),
        }
    }

    #[test]
    fn test_deserialize_unsupported_version() {
        let json = r#"{ "version": 999, "settings": {} }"#;
        match deserialize_settings(json.as_bytes()) {
            Err(PersistenceError::UnsupportedVersion(999)) => {}
            _ => panic!("Expected UnsupportedVersion error"),
        }
    }

    #[test]
    fn test_load_settings_safe_with_invalid_data() {
        let loaded = load_settings_safe(b"not json at all");
        assert_eq!(loaded, NotepadSettings::default());
    }

    #[test]
    fn test_stable_keybinding_order_in_json() {
        let bytes = serialize_settings(&NotepadSettings::default()).unwrap();
        let json_str = core::str::from_utf8(&bytes).unwrap();

        let open_pos = json_str.find("\"open\"").unwrap();
        let redo_pos = json_str.find("\"redo\"").unwrap();
        let undo_pos = json_str.find("\"undo\"").unwrap();

        assert!(open_pos < redo_pos);
        assert!(redo_pos < undo_pos);
    }
}
