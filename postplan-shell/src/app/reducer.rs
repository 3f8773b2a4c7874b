//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The reducer owns every mutation of the store
//! and composer; it never prints. Outcomes are left in `status` and `error`
//! for the renderer to pick up.

use libpostplan::scheduling::{ensure_not_before, parse_date, parse_time};
use libpostplan::{PostId, PostStore, PostplanError};
use tracing::{debug, info};

use super::actions::Action;
use super::state::AppState;

/// Shortest id prefix accepted when referring to a post
pub const MIN_ID_PREFIX: usize = 4;

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        // === Navigation ===
        Action::NavigateTo(screen) => {
            state.screen = Some(screen);
            state
        }

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        // === Composer ===
        Action::ComposerSetContent(content) => {
            state.composer.set_content(content);
            let count = state.composer.char_count();
            set_status(state, format!("Content set ({} characters)", count))
        }

        Action::ComposerSuggest => {
            state.composer.apply_suggestion(&mut state.suggestions);
            let message = format!("Suggestion: {}", state.composer.content());
            set_status(state, message)
        }

        Action::ComposerTogglePlatform(platform) => {
            let selected = state.composer.toggle_platform(platform);
            let verb = if selected { "Selected" } else { "Deselected" };
            set_status(state, format!("{} {}", verb, platform.metadata().label))
        }

        Action::ComposerSetDate(input) => {
            let today = state.clock.today();
            match parse_date(&input, today).and_then(|d| ensure_not_before(d, today)) {
                Ok(date) => {
                    state.composer.set_date(date);
                    set_status(state, format!("Date set to {}", date))
                }
                Err(e) => show_error(state, e),
            }
        }

        Action::ComposerSetTime(input) => match parse_time(&input) {
            Ok(time) => {
                state.composer.set_time(time);
                set_status(state, format!("Time set to {}", time.format("%H:%M")))
            }
            Err(e) => show_error(state, e),
        },

        Action::ComposerSubmit => match state.composer.submit(&mut state.store) {
            Ok(post) => {
                info!(post_id = %post.id(), "Scheduled post");
                let mut message = format!(
                    "Scheduled {} for {}",
                    short_id(&post.id()),
                    post.scheduled_at().format("%Y-%m-%d %H:%M")
                );
                if post.scheduled_at() < state.clock.now() {
                    message.push_str(" (that time has already passed)");
                }
                set_status(state, message)
            }
            Err(e) => show_error(state, PostplanError::from(e)),
        },

        // === Queue ===
        Action::QueueMarkPosted(reference) => match resolve_id(&state.store, &reference) {
            Ok(Some(id)) => {
                let message = if state.store.mark_posted(&id) {
                    format!("Marked {} as posted", short_id(&id))
                } else {
                    format!("No change: {} is not a pending post", short_id(&id))
                };
                set_status(state, message)
            }
            Ok(None) => set_status(state, format!("No post matches '{}'", reference)),
            Err(e) => show_error(state, e),
        },

        Action::QueueDelete(reference) => match resolve_id(&state.store, &reference) {
            Ok(Some(id)) => {
                let message = if state.store.delete(&id) {
                    format!("Deleted {}", short_id(&id))
                } else {
                    format!("No change: {} does not exist", short_id(&id))
                };
                set_status(state, message)
            }
            Ok(None) => set_status(state, format!("No post matches '{}'", reference)),
            Err(e) => show_error(state, e),
        },

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },
    }
}

fn set_status(mut state: AppState, message: String) -> AppState {
    state.status.message = Some(message);
    state
}

fn show_error(state: AppState, error: PostplanError) -> AppState {
    debug!(error = %error, "Command failed");
    reduce(state, Action::ShowError(error.to_string()))
}

/// First eight characters of an id, enough to refer back to it
pub fn short_id(id: &PostId) -> String {
    id.to_string().chars().take(8).collect()
}

/// Turn a full id or an id prefix into a [`PostId`]
///
/// A full id is returned as-is even when no live post has it, so deleting or
/// marking it stays a no-op at the store. A prefix must match exactly one
/// live post.
///
/// # Errors
///
/// - prefix shorter than [`MIN_ID_PREFIX`]
/// - prefix matching more than one post
fn resolve_id(store: &PostStore, reference: &str) -> libpostplan::Result<Option<PostId>> {
    let reference = reference.trim();
    if let Ok(id) = reference.parse::<PostId>() {
        return Ok(Some(id));
    }

    if reference.chars().count() < MIN_ID_PREFIX {
        return Err(PostplanError::InvalidInput(format!(
            "Post id '{}' is too short (use at least {} characters)",
            reference, MIN_ID_PREFIX
        )));
    }

    let needle = reference.to_lowercase();
    let mut matches = store
        .iter()
        .map(|p| p.id())
        .filter(|id| id.to_string().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (None, _) => Ok(None),
        (Some(id), None) => Ok(Some(id)),
        (Some(_), Some(_)) => Err(PostplanError::InvalidInput(format!(
            "Post id '{}' is ambiguous",
            reference
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use chrono::NaiveDate;
    use libpostplan::{Composer, FixedClock, Platform, Suggestions};
    use std::sync::Arc;

    fn state() -> AppState {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock = Arc::new(FixedClock(now));
        AppState::with_parts(
            clock.clone(),
            Composer::with_clock(clock),
            Suggestions::seeded(1),
        )
    }

    #[test]
    fn test_quit_action() {
        let state = state();
        assert!(!state.should_quit);

        let state = reduce(state, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_navigate_sets_screen() {
        let state = reduce(state(), Action::NavigateTo(Screen::Stats));
        assert_eq!(state.screen, Some(Screen::Stats));
    }

    #[test]
    fn test_submit_failure_sets_error_and_keeps_draft() {
        let mut state = reduce(state(), Action::ComposerSetContent("Hi".to_string()));
        state = reduce(state, Action::ComposerSubmit);

        assert_eq!(
            state.error.as_deref(),
            Some("Validation failed: Select at least one platform")
        );
        assert_eq!(state.composer.content(), "Hi");
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_submit_success_sets_status() {
        let mut state = reduce(state(), Action::ComposerSetContent("Hi".to_string()));
        state = reduce(state, Action::ComposerTogglePlatform(Platform::Twitter));
        state = reduce(state, Action::ComposerSubmit);

        assert!(state.error.is_none());
        assert_eq!(state.store.len(), 1);
        assert!(state.status.message.unwrap().starts_with("Scheduled "));
    }

    #[test]
    fn test_set_date_rejects_past_day() {
        let state = reduce(state(), Action::ComposerSetDate("2026-10-18".to_string()));
        assert!(state.error.unwrap().contains("in the past"));
    }

    #[test]
    fn test_set_date_with_time_of_day_keeps_draft() {
        let state = reduce(state(), Action::ComposerSetDate("tomorrow 9am".to_string()));

        assert!(state.error.unwrap().contains("time HH:MM"));
        assert_eq!(state.composer.date(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(state.composer.time().format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn test_resolve_short_prefix_is_error() {
        let store = PostStore::new();
        assert!(resolve_id(&store, "ab").is_err());
    }

    #[test]
    fn test_resolve_unknown_prefix_is_none() {
        let store = PostStore::new();
        assert!(resolve_id(&store, "abcdef").unwrap().is_none());
    }
}
