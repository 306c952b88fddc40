//! Document storage capability

use crate::DocumentPath;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use core::fmt;

/// The only error the session reports: an underlying read or write failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoFailure {
    pub path: String,
    pub message: String,
}

impl IoFailure {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for IoFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I/O failure on {}: {}", self.path, self.message)
    }
}

impl core::error::Error for IoFailure {}

/// Whole-document read/write access handed to the session
///
/// Implementations must release any handle they acquire before returning,
/// on success and on failure.
pub trait DocumentStore {
    fn read(&mut self, path: &DocumentPath) -> Result<String, IoFailure>;
    fn write(&mut self, path: &DocumentPath, text: &str) -> Result<(), IoFailure>;
}

/// In-memory store used by simulations and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, String>,
    failing_reads: BTreeSet<String>,
    failing_writes: BTreeSet<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn fail_reads_for(&mut self, path: impl Into<String>) {
        self.failing_reads.insert(path.into());
    }

    pub fn fail_writes_for(&mut self, path: impl Into<String>) {
        self.failing_writes.insert(path.into());
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DocumentStore for MemoryStore {
    fn read(&mut self, path: &DocumentPath) -> Result<String, IoFailure> {
        if self.failing_reads.contains(path.as_str()) {
            return Err(IoFailure::new(path.as_str(), "read refused"));
        }
        self.files
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| IoFailure::new(path.as_str(), "file not found"))
    }

    fn write(&mut self, path: &DocumentPath, text: &str) -> Result<(), IoFailure> {
        if self.failing_writes.contains(path.as_str()) {
            return Err(IoFailure::new(path.as_str(), "write refused"));
        }
        self.files.insert(path.as_str().to_string(), text.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        let path = DocumentPath::new("a.txt");
        store.write(&path, "hello").unwrap();
        assert_eq!(store.read(&path).unwrap(), "hello");
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_memory_store_missing_file() {
        let mut store = MemoryStore::new();
        let err = store.read(&DocumentPath::new("missing.txt")).unwrap_err();
        assert_eq!(err.path, "missing.txt");
        assert_eq!(err.message, "file not found");
    }

    #[test]
    fn test_memory_store_injected_failures() {
        let mut store = MemoryStore::new().with_file("locked.txt", "x");
        store.fail_reads_for("locked.txt");
        store.fail_writes_for("locked.txt");

        let path = DocumentPath::new("locked.txt");
        assert!(store.read(&path).is_err());
        assert!(store.write(&path, "y").is_err());
        assert_eq!(store.get("locked.txt"), Some("x"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_io_failure_display() {
        let err = IoFailure::new("a.txt", "disk full");
        assert_eq!(alloc::format!("{}", err), "I/O failure on a.txt: disk full");
    }
}
