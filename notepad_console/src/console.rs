//! # Console Window
//!
//! Implements the editor's window capabilities on a line-based terminal.
//! Dialogs become prompts answered on the input; the title is printed when
//! it changes; the text box is an in-memory string shown with `:show`.

use services_notepad::{FileDialogs, PromptDialogs, SaveChoice, TextView, WindowTitle};
use services_settings::FileFilter;
use std::io::{BufRead, Write};

pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    text: String,
    title: String,
    /// Answer for the next file dialog, set by commands that carry a path
    preselected_path: Option<String>,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            text: String::new(),
            title: String::new(),
            preselected_path: None,
        }
    }

    /// Text currently shown in the "text box"
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Answer the next file dialog with `path` instead of prompting
    pub fn preselect_path(&mut self, path: impl Into<String>) {
        self.preselected_path = Some(path.into());
    }

    /// Reads one line, `None` at end of input
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes one line; a closed output is not an editor error
    pub fn print(&mut self, line: &str) {
        let _ = writeln!(self.output, "{}", line);
        let _ = self.output.flush();
    }

    fn prompt(&mut self, question: &str) -> Option<String> {
        let _ = write!(self.output, "{}", question);
        let _ = self.output.flush();
        match self.read_line() {
            Ok(Some(answer)) => Some(answer.trim().to_string()),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "console input failed");
                None
            }
        }
    }

    fn pick_path(&mut self, verb: &str, filters: &[FileFilter]) -> Option<String> {
        if let Some(path) = self.preselected_path.take() {
            return Some(path);
        }
        let labels: Vec<&str> = filters.iter().map(|f| f.label.as_str()).collect();
        if !labels.is_empty() {
            self.print(&format!("Filters: {}", labels.join(", ")));
        }
        self.prompt(&format!("{} (empty to cancel): ", verb))
            .filter(|answer| !answer.is_empty())
    }
}

impl<R: BufRead, W: Write> TextView for ConsoleUi<R, W> {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl<R: BufRead, W: Write> WindowTitle for ConsoleUi<R, W> {
    fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.title = title.to_string();
            self.print(&format!("== {} ==", title));
        }
    }
}

impl<R: BufRead, W: Write> FileDialogs for ConsoleUi<R, W> {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<String> {
        self.pick_path("Open file", filters)
    }

    fn pick_save_path(&mut self, filters: &[FileFilter]) -> Option<String> {
        self.pick_path("Save as", filters)
    }
}

impl<R: BufRead, W: Write> PromptDialogs for ConsoleUi<R, W> {
    fn confirm_save_changes(&mut self, document: &str) -> SaveChoice {
        let question = format!("Save changes to {}? [s]ave/[d]iscard/[c]ancel: ", document);
        match self.prompt(&question).as_deref().map(str::to_lowercase).as_deref() {
            Some("s" | "save" | "y" | "yes") => SaveChoice::Save,
            Some("d" | "discard" | "n" | "no") => SaveChoice::Discard,
            _ => SaveChoice::Cancel,
        }
    }

    fn show_error(&mut self, message: &str) {
        self.print(&format!("error: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ui(input: &str) -> ConsoleUi<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleUi::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(ui: &ConsoleUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.output().clone()).unwrap()
    }

    #[test]
    fn test_title_printed_only_on_change() {
        let mut ui = ui("");
        ui.set_title("Untitled");
        ui.set_title("Untitled");
        ui.set_title("a.txt");
        assert_eq!(output(&ui), "== Untitled ==\n== a.txt ==\n");
    }

    #[test]
    fn test_pick_path_prompts() {
        let mut ui = ui("notes.txt\n");
        let filters = [FileFilter::new("Text documents (*.txt)", &["*.txt"])];
        assert_eq!(ui.pick_open_path(&filters), Some("notes.txt".to_string()));
        assert!(output(&ui).contains("Filters: Text documents (*.txt)"));
        assert!(output(&ui).contains("Open file"));
    }

    #[test]
    fn test_pick_path_empty_or_eof_cancels() {
        let mut ui = ui("\n");
        assert_eq!(ui.pick_save_path(&[]), None);
        assert_eq!(ui.pick_save_path(&[]), None);
    }

    #[test]
    fn test_preselected_path_skips_prompt() {
        let mut ui = ui("");
        ui.preselect_path("out.txt");
        assert_eq!(ui.pick_save_path(&[]), Some("out.txt".to_string()));
        assert_eq!(output(&ui), "");
        assert_eq!(ui.pick_save_path(&[]), None);
    }

    #[test]
    fn test_confirm_answers() {
        let mut ui = ui("s\nDiscard\nwhatever\n");
        assert_eq!(ui.confirm_save_changes("a.txt"), SaveChoice::Save);
        assert_eq!(ui.confirm_save_changes("a.txt"), SaveChoice::Discard);
        assert_eq!(ui.confirm_save_changes("a.txt"), SaveChoice::Cancel);
        assert_eq!(ui.confirm_save_changes("a.txt"), SaveChoice::Cancel);
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut ui = ui("one\r\ntwo");
        assert_eq!(ui.read_line().unwrap(), Some("one".to_string()));
        assert_eq!(ui.read_line().unwrap(), Some("two".to_string()));
        assert_eq!(ui.read_line().unwrap(), None);
    }
}
