//! Postplan - compose, schedule and track social posts
//!
//! This library holds the post lifecycle: the platform registry, the post
//! entity and its validation, the in-memory store, the chronological and
//! aggregate views over it, and the draft composer that feeds it.
//!
//! Nothing is delivered anywhere. A post is "posted" when the user says so.
//!
//! # Example
//!
//! ```
//! use libpostplan::{Composer, PostStore, QueueView};
//! use libpostplan::platforms::Platform;
//!
//! let mut store = PostStore::new();
//! let mut composer = Composer::new();
//!
//! composer.set_content("Launch day!");
//! composer.toggle_platform(Platform::Twitter);
//! composer.toggle_platform(Platform::Linkedin);
//! let post = composer.submit(&mut store).unwrap();
//!
//! store.mark_posted(&post.id());
//!
//! let stats = QueueView::new(&store).stats();
//! assert_eq!(stats.posted, 1);
//! assert_eq!(stats.distinct_platforms, 2);
//! ```

pub mod clock;
pub mod composer;
pub mod config;
pub mod error;
pub mod logging;
pub mod platforms;
pub mod scheduling;
pub mod store;
pub mod suggestions;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use composer::Composer;
pub use config::Config;
pub use error::{ConfigError, PostplanError, Result, ValidationError};
pub use platforms::{Platform, PlatformSet};
pub use store::PostStore;
pub use suggestions::Suggestions;
pub use types::{Post, PostId, PostStatus};
pub use view::{QueueStats, QueueView};
