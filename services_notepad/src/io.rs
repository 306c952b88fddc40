//! File-system document I/O

use editor_core::{DocumentPath, DocumentStore, IoFailure};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// `DocumentStore` backed by the local file system
///
/// Relative paths resolve against `root` when one is set, otherwise against
/// the process working directory. Each call opens and closes its own handle.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentStore {
    root: Option<PathBuf>,
}

impl FsDocumentStore {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self, path: &DocumentPath) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path.as_str()),
            None => PathBuf::from(path.as_str()),
        }
    }

    fn failure(path: &DocumentPath, err: io::Error) -> IoFailure {
        let message = match err.kind() {
            io::ErrorKind::InvalidData => "file is not valid UTF-8 text".to_string(),
            _ => err.to_string(),
        };
        IoFailure::new(path.as_str(), message)
    }
}

impl DocumentStore for FsDocumentStore {
    fn read(&mut self, path: &DocumentPath) -> Result<String, IoFailure> {
        let mut file = File::open(self.resolve(path)).map_err(|e| Self::failure(path, e))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Self::failure(path, e))?;
        Ok(content)
    }

    fn write(&mut self, path: &DocumentPath, text: &str) -> Result<(), IoFailure> {
        let mut file = File::create(self.resolve(path)).map_err(|e| Self::failure(path, e))?;
        file.write_all(text.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| Self::failure(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = FsDocumentStore::with_root(dir.path());
        let path = DocumentPath::new("notes.txt");

        store.write(&path, "line one\nline two").unwrap();
        assert_eq!(store.read(&path).unwrap(), "line one\nline two");
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "line one\nline two"
        );
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a much longer original").unwrap();

        let mut store = FsDocumentStore::with_root(dir.path());
        store.write(&DocumentPath::new("a.txt"), "short").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let mut store = FsDocumentStore::with_root(dir.path());

        let err = store.read(&DocumentPath::new("missing.txt")).unwrap_err();
        assert_eq!(err.path, "missing.txt");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();

        let mut store = FsDocumentStore::with_root(dir.path());
        let err = store.read(&DocumentPath::new("bin.dat")).unwrap_err();
        assert_eq!(err.message, "file is not valid UTF-8 text");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let mut store = FsDocumentStore::with_root(dir.path());

        let result = store.write(&DocumentPath::new("no/such/dir/a.txt"), "x");
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_path_ignores_root() {
        let dir = tempdir().unwrap();
        let absolute = dir.path().join("abs.txt");
        let mut store = FsDocumentStore::with_root("/nonexistent-root");

        let path = DocumentPath::new(absolute.to_string_lossy().into_owned());
        store.write(&path, "abs").unwrap();
        assert_eq!(fs::read_to_string(&absolute).unwrap(), "abs");
    }
}
