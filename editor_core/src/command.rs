//! Menu commands

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A user-invoked editor command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Command {
    /// Pick a file and load it into the buffer
    Open,
    /// Write to the current file, asking for a path if there is none
    Save,
    /// Ask for a path and write to it
    SaveAs,
    Undo,
    Redo,
    /// Close the document and start an empty one
    Close,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Undo,
        Command::Redo,
        Command::Close,
    ];

    /// Stable name used in settings files
    pub fn name(&self) -> &'static str {
        match self {
            Command::Open => "open",
            Command::Save => "save",
            Command::SaveAs => "save_as",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Close => "close",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn test_from_name_trims() {
        assert_eq!(Command::from_name(" save_as "), Some(Command::SaveAs));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Command::from_name("print"), None);
        assert_eq!(Command::from_name(""), None);
    }
}
