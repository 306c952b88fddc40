//! Text snapshots and the observable session snapshot

use crate::DocumentStatus;
use alloc::string::String;
use core::fmt;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Immutable copy of the whole buffer at one point in time
///
/// A snapshot has no identity beyond its text; two snapshots with the same
/// text are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Snapshot {
    text: String,
}

impl Snapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Snapshot {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Snapshot {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Complete session state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub text: String,
    pub path: Option<String>,
    pub status: DocumentStatus,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.text.as_bytes());
        hasher.update(b"\0");

        match &self.path {
            Some(path) => {
                hasher.update([1u8]);
                hasher.update(path.as_bytes());
            }
            None => hasher.update([0u8]),
        }

        hasher.update([self.status as u8]);
        hasher.update(self.undo_depth.to_le_bytes());
        hasher.update(self.redo_depth.to_le_bytes());

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn sample() -> EditorSnapshot {
        EditorSnapshot {
            text: "hello".to_string(),
            path: Some("notes.txt".to_string()),
            status: DocumentStatus::Saved,
            undo_depth: 0,
            redo_depth: 0,
        }
    }

    #[test]
    fn test_snapshot_equality_is_by_text() {
        assert_eq!(Snapshot::new("abc"), Snapshot::from("abc"));
        assert_ne!(Snapshot::new("abc"), Snapshot::new("abd"));
        assert!(Snapshot::default().is_empty());
        assert_eq!(Snapshot::new("abc").len(), 3);
    }

    #[test]
    fn test_snapshot_hash_deterministic() {
        let snapshot = sample();
        assert_eq!(snapshot.hash(), snapshot.clone().hash(), "Hash should be deterministic");
    }

    #[test]
    fn test_snapshot_hash_different_for_different_state() {
        let clean = sample();
        let mut modified = sample();
        modified.status = DocumentStatus::Modified;

        let mut untitled = sample();
        untitled.path = None;

        assert_ne!(clean.hash(), modified.hash());
        assert_ne!(clean.hash(), untitled.hash());
    }
}
