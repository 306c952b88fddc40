//! # Notepad Console Host
//!
//! A terminal host for the notepad editor.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The editor never prints; the console window does
//! - **Dialogs are prompts**: File pickers and confirmations read a line of input
//! - **Scriptable by construction**: Input is any `BufRead`, so a file replays a session
//! - **Deterministic mode is first-class**: For tests
//!
//! ## Responsibilities
//!
//! The console host:
//! - Loads settings and builds the editor
//! - Runs a line loop (read → parse → execute)
//! - Implements the editor's window capabilities on a terminal
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Provide terminal emulation or cursor addressing
//! - Edit text in place (lines are appended or the buffer is replaced)
//! - Manage more than one document

pub mod commands;
pub mod console;
pub mod runtime;

pub use commands::{ConsoleCommand, ConsoleCommandError, ConsoleCommandParser};
pub use console::ConsoleUi;
pub use runtime::{ConsoleConfig, ConsoleError, ConsoleRuntime, Flow};
