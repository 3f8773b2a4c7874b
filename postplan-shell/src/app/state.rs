//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use std::sync::Arc;

use libpostplan::{Clock, Composer, Config, PostStore, Suggestions, SystemClock};

use super::actions::Screen;
use crate::error::Result;

/// Root application state
///
/// Owns the one store and the one composer for the lifetime of the shell.
pub struct AppState {
    /// Should the shell exit?
    pub should_quit: bool,

    /// Screen to render after the current command, if any
    pub screen: Option<Screen>,

    pub composer: Composer,

    pub store: PostStore,

    pub suggestions: Suggestions,

    pub clock: Arc<dyn Clock>,

    pub status: StatusBarState,

    /// Error to surface for the current command
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub message: Option<String>,
}

impl AppState {
    /// Fresh state on the system clock and built-in defaults
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(SystemClock),
            Composer::new(),
            Suggestions::from_entropy(),
        )
    }

    /// State wired from configuration
    ///
    /// # Errors
    ///
    /// Fails if the configured default time or suggestion corpus is invalid.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let default_time = config.composer.default_time()?;
        let composer = Composer::with_defaults(Arc::clone(&clock), default_time);
        let suggestions = Suggestions::from_config(&config.suggestions)?;
        Ok(Self::with_parts(clock, composer, suggestions))
    }

    pub fn with_parts(clock: Arc<dyn Clock>, composer: Composer, suggestions: Suggestions) -> Self {
        Self {
            should_quit: false,
            screen: None,
            composer,
            store: PostStore::new(),
            suggestions,
            clock,
            status: StatusBarState::default(),
            error: None,
        }
    }

    /// Forget per-command output once it has been rendered
    pub fn end_frame(&mut self) {
        self.screen = None;
        self.status.message = None;
        self.error = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
