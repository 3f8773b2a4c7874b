//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: `(State, Action) -> State`

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::{Action, Screen};
pub use reducer::reduce;
pub use state::{AppState, StatusBarState};
