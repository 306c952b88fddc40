//! # Console Runtime
//!
//! The read-eval loop that feeds console lines into the editor.

use crate::commands::{ConsoleCommand, ConsoleCommandParser};
use crate::console::ConsoleUi;
use editor_core::Command;
use services_notepad::{Editor, EditorAction, EditorError, FsDocumentStore, TextView};
use services_logger::{LogLevel, Logger};
use services_settings::persistence::PersistenceError;
use services_settings::NotepadSettings;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Console runtime error types
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Settings error: {0}")]
    Settings(#[from] PersistenceError),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Console runtime configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub settings: NotepadSettings,
    /// File opened before the first command
    pub initial_path: Option<String>,
    /// Directory relative paths resolve against
    pub root: Option<PathBuf>,
    /// Lowest level kept in the editor log shown by `:log`
    pub log_level: LogLevel,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            settings: NotepadSettings::default(),
            initial_path: None,
            root: None,
            log_level: LogLevel::Info,
        }
    }
}

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ConsoleRuntime<R, W> {
    editor: Editor<FsDocumentStore>,
    ui: ConsoleUi<R, W>,
}

impl<R: BufRead, W: Write> ConsoleRuntime<R, W> {
    /// Creates a new console runtime
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Result<Self, ConsoleError> {
        let store = match config.root {
            Some(root) => FsDocumentStore::with_root(root),
            None => FsDocumentStore::new(),
        };
        let editor = Editor::with_settings(store, config.settings)?
            .with_logger(Logger::new("notepad").with_min_level(config.log_level));
        let mut runtime = Self {
            editor,
            ui: ConsoleUi::new(input, output),
        };

        runtime.editor.refresh_title(&mut runtime.ui);
        if let Some(path) = config.initial_path {
            runtime.editor.open_path(&path, &mut runtime.ui);
        }
        Ok(runtime)
    }

    pub fn editor(&self) -> &Editor<FsDocumentStore> {
        &self.editor
    }

    pub fn ui(&self) -> &ConsoleUi<R, W> {
        &self.ui
    }

    pub fn into_ui(self) -> ConsoleUi<R, W> {
        self.ui
    }

    /// Runs until `:quit` or end of input
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        while let Some(line) = self.ui.read_line()? {
            if self.step(&line) == Flow::Quit {
                break;
            }
        }
        tracing::debug!(title = %self.editor.title(), "console session finished");
        Ok(())
    }

    /// Handles one input line
    pub fn step(&mut self, line: &str) -> Flow {
        let command = match ConsoleCommandParser::parse(line) {
            Ok(command) => command,
            Err(err) => {
                self.ui.print(&format!("error: {}", err));
                return Flow::Continue;
            }
        };

        match command {
            ConsoleCommand::Open { path: Some(path) } => {
                self.editor.open_path(&path, &mut self.ui);
            }
            ConsoleCommand::Open { path: None } => {
                self.editor.execute(Command::Open, &mut self.ui);
            }
            ConsoleCommand::Save => {
                self.editor.execute(Command::Save, &mut self.ui);
            }
            ConsoleCommand::SaveAs { path } => {
                if let Some(path) = path {
                    self.ui.preselect_path(path);
                }
                self.editor.execute(Command::SaveAs, &mut self.ui);
            }
            ConsoleCommand::Undo => {
                self.editor.execute(Command::Undo, &mut self.ui);
            }
            ConsoleCommand::Redo => {
                self.editor.execute(Command::Redo, &mut self.ui);
            }
            ConsoleCommand::Close => {
                self.editor.execute(Command::Close, &mut self.ui);
            }
            ConsoleCommand::Key(chord) => {
                if let Err(err) = self.editor.handle_shortcut(chord, &mut self.ui) {
                    self.ui.print(&format!("error: {}", err));
                }
            }
            ConsoleCommand::Set(text) => self.replace_text(text),
            ConsoleCommand::Append(line) => {
                let text = if self.ui.text().is_empty() {
                    line
                } else {
                    format!("{}\n{}", self.ui.text(), line)
                };
                self.replace_text(text);
            }
            ConsoleCommand::Show => {
                let text = self.ui.text().to_string();
                for line in text.lines() {
                    self.ui.print(&format!("| {}", line));
                }
            }
            ConsoleCommand::Log => {
                let entries: Vec<String> =
                    self.editor.logger().entries().map(|e| e.to_string()).collect();
                for entry in entries {
                    self.ui.print(&entry);
                }
            }
            ConsoleCommand::Quit => return self.quit(),
        }
        Flow::Continue
    }

    /// Simulates the user editing the text box
    fn replace_text(&mut self, text: String) {
        self.ui.set_text(&text);
        self.editor.text_changed(&text, &mut self.ui);
    }

    fn quit(&mut self) -> Flow {
        if !self.editor.session().needs_save_prompt() {
            return Flow::Quit;
        }
        match self.editor.execute(Command::Close, &mut self.ui) {
            EditorAction::Closed => Flow::Quit,
            _ => Flow::Continue,
        }
    }
}
