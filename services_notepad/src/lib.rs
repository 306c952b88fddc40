//! # Notepad Editor Service
//!
//! This crate implements the controller of a single-document notepad window.
//!
//! ## Philosophy
//!
//! - **Toolkit-agnostic**: The window, text box and dialogs are capabilities the host implements
//! - **Whole-file I/O**: Documents are read and written in one piece through a `DocumentStore`
//! - **Failures are reported, not fatal**: I/O errors surface as a message and leave the session intact
//! - **Testable**: Every flow runs against recording fakes and in-memory stores
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A multi-document editor
//! - A rich text editor
//! - A streaming editor for huge files
//! - An encoding negotiator (files are UTF-8)
//!
//! ## Design
//!
//! - `Editor` owns the `EditorSession`, the store, settings and a structured logger
//! - Menu commands and shortcuts drive the open/save/save-as/undo/redo/close flows
//! - The host forwards text-box changes with `Editor::text_changed`
//! - The window title is recomputed after every state change

pub mod editor;
pub mod io;
pub mod title;
pub mod ui;

pub use editor::{Editor, EditorAction, EditorError, EditorResult};
pub use io::FsDocumentStore;
pub use title::TitleFormatter;
pub use ui::{EditorUi, FileDialogs, PromptDialogs, SaveChoice, TextView, WindowTitle};
