//! Draft composer
//!
//! Holds the single in-flight draft: content, selected platforms, date and
//! time. Submitting turns the draft into a [`Post`], commits it to a
//! [`PostStore`] and resets the draft. A rejected submit leaves the draft
//! exactly as it was so the user can fix it.
//!
//! # Examples
//!
//! ```
//! use libpostplan::{Composer, PostStore};
//! use libpostplan::platforms::Platform;
//!
//! let mut store = PostStore::new();
//! let mut composer = Composer::new();
//!
//! composer.set_content("Hello from the composer");
//! composer.toggle_platform(Platform::Twitter);
//! let post = composer.submit(&mut store).unwrap();
//!
//! assert_eq!(store.all()[0].id(), post.id());
//! assert!(composer.content().is_empty());
//! ```

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::platforms::{Platform, PlatformSet};
use crate::store::PostStore;
use crate::suggestions::Suggestions;
use crate::types::Post;

/// Time of day a fresh draft starts at, unless configured otherwise
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub struct Composer {
    content: String,
    selected: PlatformSet,
    date: NaiveDate,
    time: NaiveTime,
    default_time: NaiveTime,
    clock: Arc<dyn Clock>,
}

impl Composer {
    /// Composer on the system clock with a 12:00 default time
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_defaults(clock, default_time())
    }

    /// Composer whose drafts start at `default_time` instead of 12:00
    pub fn with_defaults(clock: Arc<dyn Clock>, default_time: NaiveTime) -> Self {
        let date = clock.today();
        Self {
            content: String::new(),
            selected: PlatformSet::new(),
            date,
            time: default_time,
            default_time,
            clock,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selected_platforms(&self) -> &PlatformSet {
        &self.selected
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Characters in the content, counted as Unicode scalar values
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_selected(&self, platform: Platform) -> bool {
        self.selected.contains(platform)
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    /// Select the platform if it is not selected, deselect it otherwise.
    /// Returns whether it is selected afterwards.
    pub fn toggle_platform(&mut self, platform: Platform) -> bool {
        self.selected.toggle(platform)
    }

    /// Replace the content with a suggestion
    pub fn apply_suggestion<R: Rng>(&mut self, suggestions: &mut Suggestions<R>) {
        self.content = suggestions.suggest().to_string();
    }

    /// Commit the draft to `store`
    ///
    /// On success the new post is returned (a copy of what the store holds)
    /// and every field goes back to its default: empty content, no
    /// platforms, today's date, the default time.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`Post::construct`]; the draft is
    /// not touched.
    pub fn submit(&mut self, store: &mut PostStore) -> Result<Post, ValidationError> {
        let post = Post::construct(
            self.content.clone(),
            self.selected.clone(),
            self.date,
            self.time,
        )
        .map_err(|e| {
            debug!(error = %e, "Draft rejected");
            e
        })?;

        if post.scheduled_at() < self.clock.now() {
            warn!(post_id = %post.id(), scheduled_at = %post.scheduled_at(), "Scheduled time has already passed");
        }

        store.insert(post.clone());
        self.reset();
        Ok(post)
    }

    /// Drop the draft and start over
    pub fn reset(&mut self) {
        self.content.clear();
        self.selected.clear();
        self.date = self.clock.today();
        self.time = self.default_time;
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("content", &self.content)
            .field("selected", &self.selected)
            .field("date", &self.date)
            .field("time", &self.time)
            .finish()
    }
}
