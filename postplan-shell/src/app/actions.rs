//! Actions for the reducer pattern
//!
//! Every state change is described by an [`Action`]. The command parser
//! produces them from input lines; the reducer applies them.

use libpostplan::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Navigation ===
    /// Show a screen after this command
    NavigateTo(Screen),

    /// Quit the shell
    Quit,

    // === Composer ===
    /// Replace the draft content
    ComposerSetContent(String),

    /// Replace the draft content with a random suggestion
    ComposerSuggest,

    /// Select or deselect a platform
    ComposerTogglePlatform(Platform),

    /// Set the draft date from user text ("2026-11-02", "tomorrow")
    ComposerSetDate(String),

    /// Set the draft time from user text ("09:30")
    ComposerSetTime(String),

    /// Commit the draft to the queue
    ComposerSubmit,

    // === Queue ===
    /// Mark a post as posted; the argument is an id or id prefix
    QueueMarkPosted(String),

    /// Delete a post; the argument is an id or id prefix
    QueueDelete(String),

    // === Error Handling ===
    /// Report a failed command
    ShowError(String),
}

/// What to render after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The in-flight draft
    Draft,
    /// Posts in chronological order
    Queue,
    /// Summary counters
    Stats,
    /// Platform registry
    Platforms,
    /// Command reference
    Help,
}
