//! Capabilities the host window provides
//!
//! Each trait is one narrow thing the editor needs from the GUI layer. A
//! host implements all of them and gets `EditorUi` for free.

use services_settings::FileFilter;

/// The text box
pub trait TextView {
    /// Replace the displayed text
    ///
    /// Hosts whose widget reports programmatic changes may forward the
    /// resulting event to `Editor::text_changed`; the session ignores it.
    fn set_text(&mut self, text: &str);
}

/// The window caption
pub trait WindowTitle {
    fn set_title(&mut self, title: &str);
}

/// Open and save file pickers
pub trait FileDialogs {
    /// Returns the chosen path, `None` when cancelled
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<String>;

    /// Returns the chosen path, `None` when cancelled
    fn pick_save_path(&mut self, filters: &[FileFilter]) -> Option<String>;
}

/// Answer to "save changes before closing?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal prompts
pub trait PromptDialogs {
    fn confirm_save_changes(&mut self, document: &str) -> SaveChoice;

    fn show_error(&mut self, message: &str);
}

/// Everything the editor needs from a host
pub trait EditorUi: TextView + WindowTitle + FileDialogs + PromptDialogs {}

impl<T: TextView + WindowTitle + FileDialogs + PromptDialogs> EditorUi for T {}
