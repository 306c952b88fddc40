//! Document identity and save status

use alloc::string::String;
use core::fmt;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Path of the document as supplied by the host
///
/// The core never interprets the path beyond extracting a display name;
/// resolving it is the job of the `DocumentStore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct DocumentPath(String);

impl DocumentPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path component, accepting both `/` and `\` separators
    pub fn file_name(&self) -> &str {
        let trimmed = self.0.trim_end_matches(['/', '\\']);
        trimmed
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(trimmed)
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for DocumentPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Save status of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum DocumentStatus {
    /// Never opened from or saved to a file
    Untitled,
    /// Buffer matches the last opened/saved text
    Saved,
    /// Buffer differs from the last opened/saved text
    Modified,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Untitled => "UNTITLED",
            DocumentStatus::Saved => "SAVED",
            DocumentStatus::Modified => "MODIFIED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_unix() {
        assert_eq!(DocumentPath::new("/home/user/notes.txt").file_name(), "notes.txt");
        assert_eq!(DocumentPath::new("notes.txt").file_name(), "notes.txt");
    }

    #[test]
    fn test_file_name_windows() {
        assert_eq!(DocumentPath::new(r"C:\docs\todo.txt").file_name(), "todo.txt");
    }

    #[test]
    fn test_file_name_trailing_separator() {
        assert_eq!(DocumentPath::new("/tmp/dir/").file_name(), "dir");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(DocumentStatus::Untitled.as_str(), "UNTITLED");
        assert_eq!(DocumentStatus::Saved.as_str(), "SAVED");
        assert_eq!(DocumentStatus::Modified.as_str(), "MODIFIED");
    }
}
