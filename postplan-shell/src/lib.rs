//! postplan-shell library
//!
//! Exports the shell's state machine, command parser and renderer so they can
//! be driven from tests without a terminal.

pub mod app;
pub mod command;
pub mod error;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Screen};
pub use error::{Result, ShellError};
pub use render::{render, Frame, OutputFormat};
pub use session::Session;
