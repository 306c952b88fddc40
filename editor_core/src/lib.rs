#![no_std]

//! # Editor Core
//!
//! Toolkit-independent state for a single-document text editor.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same sequence of text changes => same session state
//! - **Whole-buffer snapshots**: Undo/redo restores complete immutable texts
//! - **Mechanism over policy**: The session tracks state, hosts decide presentation
//! - **No ambient authority**: File access goes through an explicit `DocumentStore`
//!
//! ## Design
//!
//! The core provides:
//! - EditorSession: buffer text, save path, saved baseline and history
//! - History: an ordered list of snapshots with a current-position index
//! - DocumentStore: the narrow read/write capability the session is handed
//! - Command and Keymap: menu commands and their keyboard shortcuts
//! - EditorSnapshot: Deterministic state for parity testing

extern crate alloc;

pub mod command;
pub mod document;
pub mod history;
pub mod key;
pub mod session;
pub mod snapshot;
pub mod store;

pub use command::Command;
pub use document::{DocumentPath, DocumentStatus};
pub use history::History;
pub use key::{KeyChord, KeyChordError, Keymap};
pub use session::{EditorSession, SaveOutcome};
pub use snapshot::{EditorSnapshot, Snapshot};
pub use store::{DocumentStore, IoFailure, MemoryStore};
