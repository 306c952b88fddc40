//! Main editor implementation

use crate::title::TitleFormatter;
use crate::ui::{EditorUi, SaveChoice};
use editor_core::{
    Command, DocumentStore, EditorSession, IoFailure, KeyChord, Keymap, SaveOutcome,
};
use services_logger::{LogEntry, Logger};
use services_settings::{NotepadSettings, SettingsError};
use thiserror::Error;

/// Editor error
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] IoFailure),

    #[error("No command bound to {0}")]
    UnboundShortcut(KeyChord),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Editor result
pub type EditorResult<T> = Result<T, EditorError>;

/// What a command or text change did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Nothing changed
    Unchanged,
    /// The buffer took a user edit
    TextChanged,
    /// Undo or redo restored a snapshot into the view
    Restored,
    /// A file was loaded
    Opened(String),
    /// The buffer was written to the given path
    Saved(String),
    /// The document was closed and replaced by an empty one
    Closed,
    /// The user dismissed a dialog
    Cancelled,
    /// An I/O operation failed and was reported to the user
    Failed(IoFailure),
}

/// The notepad controller
///
/// Owns the session and translates commands into session calls and UI
/// updates. Failures never escape `execute`: they are shown to the user,
/// logged, and returned as `EditorAction::Failed`.
pub struct Editor<S: DocumentStore> {
    session: EditorSession,
    store: S,
    settings: NotepadSettings,
    keymap: Keymap,
    title: TitleFormatter,
    logger: Logger,
}

impl<S: DocumentStore> Editor<S> {
    /// Create an editor with default settings
    pub fn new(store: S) -> Self {
        let settings = NotepadSettings::default();
        Self {
            session: EditorSession::with_history_limit(settings.history_limit),
            store,
            keymap: Keymap::standard(),
            title: TitleFormatter::from_settings(&settings),
            settings,
            logger: Logger::new("notepad"),
        }
    }

    /// Create an editor from user settings, rejecting broken keybindings
    pub fn with_settings(store: S, settings: NotepadSettings) -> EditorResult<Self> {
        settings.validate()?;
        let keymap = settings.keymap()?;
        Ok(Self {
            session: EditorSession::with_history_limit(settings.history_limit),
            store,
            keymap,
            title: TitleFormatter::from_settings(&settings),
            settings,
            logger: Logger::new("notepad"),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn settings(&self) -> &NotepadSettings {
        &self.settings
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    /// Current window caption
    pub fn title(&self) -> String {
        self.title.format(&self.session)
    }

    /// Push the current caption to the window
    pub fn refresh_title(&self, ui: &mut impl EditorUi) {
        ui.set_title(&self.title());
    }

    /// Feed a text-box change into the session
    pub fn text_changed(&mut self, text: &str, ui: &mut impl EditorUi) -> EditorAction {
        if !self.session.on_text_changed(text) {
            return EditorAction::Unchanged;
        }
        self.logger.log(
            LogEntry::debug("text changed")
                .with_field("bytes", text.len())
                .with_field("undo_depth", self.session.undo_depth()),
        );
        self.refresh_title(ui);
        EditorAction::TextChanged
    }

    /// Run a menu command
    pub fn execute(&mut self, command: Command, ui: &mut impl EditorUi) -> EditorAction {
        match command {
            Command::Open => self.open(ui),
            Command::Save => self.save(ui),
            Command::SaveAs => self.save_as(ui),
            Command::Undo => self.undo(ui),
            Command::Redo => self.redo(ui),
            Command::Close => self.close(ui),
        }
    }

    /// Run the command bound to `chord`
    pub fn handle_shortcut(
        &mut self,
        chord: KeyChord,
        ui: &mut impl EditorUi,
    ) -> EditorResult<EditorAction> {
        let command = self
            .keymap
            .lookup(&chord)
            .ok_or(EditorError::UnboundShortcut(chord))?;
        Ok(self.execute(command, ui))
    }

    /// Ask for a file and open it
    pub fn open(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        match ui.pick_open_path(&self.settings.file_filters) {
            Some(path) => self.open_path(&path, ui),
            None => EditorAction::Cancelled,
        }
    }

    /// Open `path` without asking
    pub fn open_path(&mut self, path: &str, ui: &mut impl EditorUi) -> EditorAction {
        if let Err(failure) = self.session.open(&mut self.store, path) {
            return self.fail("Error opening file", failure, ui);
        }

        ui.set_text(self.session.text());
        self.refresh_title(ui);
        self.logger.log(
            LogEntry::info("document opened")
                .with_field("path", path)
                .with_field("bytes", self.session.text().len()),
        );
        EditorAction::Opened(path.to_string())
    }

    /// Save to the current path, asking for one if there is none
    pub fn save(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        match self.session.save(&mut self.store) {
            Ok(SaveOutcome::Saved) => self.saved(ui),
            Ok(SaveOutcome::PathRequired) => self.save_as(ui),
            Err(failure) => {
                self.refresh_title(ui);
                self.fail("Error saving file", failure, ui)
            }
        }
    }

    /// Ask for a path and save to it
    pub fn save_as(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        let Some(path) = ui.pick_save_path(&self.settings.file_filters) else {
            return EditorAction::Cancelled;
        };

        let result = self.session.save_as(&mut self.store, path);
        match result {
            Ok(()) => self.saved(ui),
            Err(failure) => {
                // the path is adopted even when the write fails
                self.refresh_title(ui);
                self.fail("Error saving file", failure, ui)
            }
        }
    }

    pub fn undo(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        let Some(text) = self.session.undo() else {
            return EditorAction::Unchanged;
        };
        ui.set_text(text);
        self.restored("undo", ui)
    }

    pub fn redo(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        let Some(text) = self.session.redo() else {
            return EditorAction::Unchanged;
        };
        ui.set_text(text);
        self.restored("redo", ui)
    }

    /// Close the document, offering to save unsaved work first
    ///
    /// Choosing Save and then cancelling or failing that save keeps the
    /// document open.
    pub fn close(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        if self.session.needs_save_prompt() {
            let name = self
                .session
                .file_name()
                .unwrap_or(self.settings.untitled_title.as_str())
                .to_string();
            match ui.confirm_save_changes(&name) {
                SaveChoice::Cancel => return EditorAction::Cancelled,
                SaveChoice::Discard => {}
                SaveChoice::Save => match self.save(ui) {
                    EditorAction::Saved(_) => {}
                    other => return other,
                },
            }
        }

        self.session.new_document();
        ui.set_text("");
        self.refresh_title(ui);
        self.logger.log(LogEntry::info("document closed"));
        EditorAction::Closed
    }

    fn saved(&mut self, ui: &mut impl EditorUi) -> EditorAction {
        let path = self
            .session
            .path()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default();
        self.refresh_title(ui);
        self.logger.log(
            LogEntry::info("document saved")
                .with_field("path", &path)
                .with_field("bytes", self.session.text().len()),
        );
        EditorAction::Saved(path)
    }

    fn restored(&mut self, direction: &str, ui: &mut impl EditorUi) -> EditorAction {
        self.refresh_title(ui);
        self.logger.log(
            LogEntry::debug(direction)
                .with_field("undo_depth", self.session.undo_depth())
                .with_field("redo_depth", self.session.redo_depth()),
        );
        EditorAction::Restored
    }

    fn fail(&mut self, context: &str, failure: IoFailure, ui: &mut impl EditorUi) -> EditorAction {
        self.logger.log(
            LogEntry::error(context)
                .with_field("path", &failure.path)
                .with_field("reason", &failure.message),
        );
        ui.show_error(&format!("{}: {}", context, failure.message));
        EditorAction::Failed(failure)
    }
}
