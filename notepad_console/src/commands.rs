//! # Console Commands
//!
//! Line-oriented command surface for the terminal host.
//!
//! ## Command Set
//!
//! - `:open [path]` - Open a file (prompts when no path is given)
//! - `:save` - Save to the current file
//! - `:saveas [path]` - Save under a new name (prompts when no path is given)
//! - `:undo`, `:redo` - Walk the history
//! - `:close` - Close the document, offering to save
//! - `:key <chord>` - Press a shortcut, e.g. `:key Ctrl+Z`
//! - `:set <text>` - Replace the buffer (`\n` starts a new line)
//! - `:show` - Print the buffer
//! - `:log` - Print the editor log
//! - `:quit` - Exit, offering to save
//!
//! Any other line is appended to the buffer. A line starting with `::` is
//! appended with the first colon removed.

use editor_core::{KeyChord, KeyChordError};
use thiserror::Error;

/// Console command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleCommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Unexpected argument for {command}: {argument}")]
    UnexpectedArgument { command: String, argument: String },

    #[error("Invalid shortcut: {0}")]
    InvalidShortcut(String),
}

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Open { path: Option<String> },
    Save,
    SaveAs { path: Option<String> },
    Undo,
    Redo,
    Close,
    Key(KeyChord),
    Set(String),
    Show,
    Log,
    Quit,
    /// Append a line of text to the buffer
    Append(String),
}

/// Console command parser
pub struct ConsoleCommandParser;

impl ConsoleCommandParser {
    /// Parses one input line
    pub fn parse(line: &str) -> Result<ConsoleCommand, ConsoleCommandError> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(literal) = line.strip_prefix("::") {
            return Ok(ConsoleCommand::Append(format!(":{}", literal)));
        }
        let Some(command_line) = line.strip_prefix(':') else {
            return Ok(ConsoleCommand::Append(line.to_string()));
        };

        let command_line = command_line.trim();
        let (name, rest) = match command_line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command_line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        match name.to_lowercase().as_str() {
            "open" | "o" => Ok(ConsoleCommand::Open { path: argument }),
            "save" | "w" => Self::no_argument(name, argument, ConsoleCommand::Save),
            "saveas" | "save_as" => Ok(ConsoleCommand::SaveAs { path: argument }),
            "undo" | "u" => Self::no_argument(name, argument, ConsoleCommand::Undo),
            "redo" | "r" => Self::no_argument(name, argument, ConsoleCommand::Redo),
            "close" | "new" => Self::no_argument(name, argument, ConsoleCommand::Close),
            "key" => Self::parse_key(argument),
            "set" => Ok(ConsoleCommand::Set(unescape(rest))),
            "show" | "p" => Self::no_argument(name, argument, ConsoleCommand::Show),
            "log" => Self::no_argument(name, argument, ConsoleCommand::Log),
            "quit" | "q" | "exit" => Self::no_argument(name, argument, ConsoleCommand::Quit),
            "" => Err(ConsoleCommandError::MissingArgument("command name".to_string())),
            other => Err(ConsoleCommandError::UnknownCommand(other.to_string())),
        }
    }

    fn no_argument(
        name: &str,
        argument: Option<String>,
        command: ConsoleCommand,
    ) -> Result<ConsoleCommand, ConsoleCommandError> {
        match argument {
            None => Ok(command),
            Some(argument) => Err(ConsoleCommandError::UnexpectedArgument {
                command: name.to_string(),
                argument,
            }),
        }
    }

    fn parse_key(argument: Option<String>) -> Result<ConsoleCommand, ConsoleCommandError> {
        let chord_text =
            argument.ok_or_else(|| ConsoleCommandError::MissingArgument("key chord".to_string()))?;
        KeyChord::parse(&chord_text)
            .map(ConsoleCommand::Key)
            .map_err(|err: KeyChordError| ConsoleCommandError::InvalidShortcut(err.to_string()))
    }
}

/// Turns `\n` into newlines and `\\` into a backslash
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
