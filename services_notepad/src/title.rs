//! Window title formatting

use editor_core::EditorSession;
use services_settings::NotepadSettings;

/// Builds the window caption from the session state
///
/// `Untitled` without a path, the file name otherwise, followed by the
/// unsaved marker while the session reports itself dirty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFormatter {
    untitled: String,
    unsaved_marker: String,
}

impl TitleFormatter {
    pub fn new(untitled: impl Into<String>, unsaved_marker: impl Into<String>) -> Self {
        Self {
            untitled: untitled.into(),
            unsaved_marker: unsaved_marker.into(),
        }
    }

    pub fn from_settings(settings: &NotepadSettings) -> Self {
        Self::new(settings.untitled_title.clone(), settings.unsaved_marker.clone())
    }

    pub fn format(&self, session: &EditorSession) -> String {
        match session.file_name() {
            None => self.untitled.clone(),
            Some(name) if session.is_dirty() && !self.unsaved_marker.is_empty() => {
                format!("{} {}", name, self.unsaved_marker)
            }
            Some(name) => name.to_string(),
        }
    }
}

impl Default for TitleFormatter {
    fn default() -> Self {
        Self::from_settings(&NotepadSettings::default())
    }
}
