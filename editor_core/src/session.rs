//! EditorSession state
//!
//! Tracks the buffer text, the path it belongs to, the text last written to
//! (or read from) that path, and the undo/redo history. The session never
//! talks to a widget: hosts feed it text changes and apply the texts it
//! hands back.

use crate::history::{History, DEFAULT_HISTORY_LIMIT};
use crate::{DocumentPath, DocumentStatus, DocumentStore, EditorSnapshot, IoFailure, Snapshot};
use alloc::string::{String, ToString};

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Buffer written to the current path
    Saved,
    /// No path is set; the host must obtain one and call `save_as`
    PathRequired,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    path: Option<DocumentPath>,
    text: String,
    /// Text as of the last successful open or save, `None` if neither happened
    saved: Option<Snapshot>,
    history: History,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            path: None,
            text: String::new(),
            saved: None,
            history: History::new(limit),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&DocumentPath> {
        self.path.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.as_ref().map(DocumentPath::file_name)
    }

    /// Text last read or written, empty when the document was never saved
    pub fn last_saved_text(&self) -> &str {
        self.saved.as_ref().map_or("", Snapshot::text)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn set_history_limit(&mut self, limit: usize) {
        self.history.set_limit(limit);
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Apply a text change reported by the view
    ///
    /// Returns `false` when `new_text` equals the buffer, which is what a
    /// view reports after the session itself restored a text into it.
    pub fn on_text_changed(&mut self, new_text: &str) -> bool {
        if new_text == self.text {
            return false;
        }

        let current = Snapshot::new(new_text);
        if new_text != self.last_saved_text() {
            let previous = Snapshot::new(core::mem::take(&mut self.text));
            self.history.record(previous, current);
        } else {
            self.history.amend(current);
        }
        self.text = new_text.to_string();
        true
    }

    /// Restore the previous snapshot; `None` when there is nothing to undo
    pub fn undo(&mut self) -> Option<&str> {
        let restored = self.history.undo()?.text().to_string();
        self.text = restored;
        Some(&self.text)
    }

    /// Re-apply an undone snapshot; `None` when there is nothing to redo
    pub fn redo(&mut self) -> Option<&str> {
        let restored = self.history.redo()?.text().to_string();
        self.text = restored;
        Some(&self.text)
    }

    /// Replace the buffer with the content of `path`
    ///
    /// On failure the session is left exactly as it was.
    pub fn open<S: DocumentStore + ?Sized>(
        &mut self,
        store: &mut S,
        path: impl Into<DocumentPath>,
    ) -> Result<(), IoFailure> {
        let path = path.into();
        let content = store.read(&path)?;

        let snapshot = Snapshot::new(content.as_str());
        self.history.reset(snapshot.clone());
        self.saved = Some(snapshot);
        self.text = content;
        self.path = Some(path);
        Ok(())
    }

    /// Write the buffer to the current path
    pub fn save<S: DocumentStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<SaveOutcome, IoFailure> {
        let Some(path) = self.path.as_ref() else {
            return Ok(SaveOutcome::PathRequired);
        };
        store.write(path, &self.text)?;
        self.saved = Some(Snapshot::new(self.text.as_str()));
        Ok(SaveOutcome::Saved)
    }

    /// Adopt `path` and write the buffer to it
    pub fn save_as<S: DocumentStore + ?Sized>(
        &mut self,
        store: &mut S,
        path: impl Into<DocumentPath>,
    ) -> Result<(), IoFailure> {
        self.path = Some(path.into());
        self.save(store).map(|_| ())
    }

    /// Dirty flag as shown in the window title
    ///
    /// An empty saved text counts as clean whatever the buffer holds, so a
    /// document that was never saved, or was saved empty, never shows the
    /// unsaved marker. Use `status` for the exact state.
    pub fn is_dirty(&self) -> bool {
        let saved = self.last_saved_text();
        if saved.is_empty() {
            return false;
        }
        self.text != saved
    }

    pub fn status(&self) -> DocumentStatus {
        match &self.saved {
            None => DocumentStatus::Untitled,
            Some(saved) if saved.text() == self.text => DocumentStatus::Saved,
            Some(_) => DocumentStatus::Modified,
        }
    }

    /// Whether closing the document should ask the user to save first
    pub fn needs_save_prompt(&self) -> bool {
        self.is_dirty() || (self.path.is_none() && !self.text.is_empty())
    }

    /// Start over with an empty, untitled buffer
    pub fn new_document(&mut self) {
        self.path = None;
        self.text.clear();
        self.saved = None;
        self.history.reset(Snapshot::default());
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            text: self.text.clone(),
            path: self.path.as_ref().map(|p| p.as_str().to_string()),
            status: self.status(),
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
