//! Core types for Postplan

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::platforms::PlatformSet;

/// Opaque post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Posted,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Pending => write!(f, "pending"),
            PostStatus::Posted => write!(f, "posted"),
        }
    }
}

/// A scheduled post
///
/// Everything except the status is fixed at construction. The status only
/// moves forward, from `Pending` to `Posted`, and only through the store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    content: String,
    platforms: PlatformSet,
    scheduled_at: NaiveDateTime,
    status: PostStatus,
}

impl Post {
    /// Build a pending post from draft fields
    ///
    /// `scheduled_at` is `date` combined with `time` as a naive local
    /// timestamp. A timestamp that already lies in the past is accepted.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyContent` if `content` is empty or whitespace
    /// - `ValidationError::NoPlatformSelected` if `platforms` is empty
    pub fn construct(
        content: impl Into<String>,
        platforms: PlatformSet,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if platforms.is_empty() {
            return Err(ValidationError::NoPlatformSelected);
        }

        Ok(Self {
            id: PostId::new(),
            content,
            platforms,
            scheduled_at: date.and_time(time),
            status: PostStatus::Pending,
        })
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn is_posted(&self) -> bool {
        self.status == PostStatus::Posted
    }

    /// Flip `Pending` to `Posted`. Returns `false` if already posted.
    pub(crate) fn mark_posted(&mut self) -> bool {
        match self.status {
            PostStatus::Pending => {
                self.status = PostStatus::Posted;
                true
            }
            PostStatus::Posted => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::Platform;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn twitter() -> PlatformSet {
        vec![Platform::Twitter].into()
    }

    #[test]
    fn test_construct_sets_pending_and_composes_timestamp() {
        let post = Post::construct("Hello", twitter(), date(), time(9, 0)).unwrap();

        assert_eq!(post.content(), "Hello");
        assert_eq!(post.status(), PostStatus::Pending);
        assert_eq!(
            post.scheduled_at(),
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
        assert_eq!(post.platforms(), &twitter());
    }

    #[test]
    fn test_construct_rejects_empty_content() {
        let result = Post::construct("", twitter(), date(), time(9, 0));
        assert_eq!(result.unwrap_err(), ValidationError::EmptyContent);
    }

    #[test]
    fn test_construct_rejects_whitespace_content() {
        let result = Post::construct("  \n\t ", twitter(), date(), time(9, 0));
        assert_eq!(result.unwrap_err(), ValidationError::EmptyContent);
    }

    #[test]
    fn test_construct_rejects_no_platforms() {
        let result = Post::construct("Hello", PlatformSet::new(), date(), time(9, 0));
        assert_eq!(result.unwrap_err(), ValidationError::NoPlatformSelected);
    }

    #[test]
    fn test_construct_reports_content_before_platforms() {
        let result = Post::construct("", PlatformSet::new(), date(), time(9, 0));
        assert_eq!(result.unwrap_err(), ValidationError::EmptyContent);
    }

    #[test]
    fn test_construct_accepts_past_timestamp() {
        let long_ago = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        let post = Post::construct("Late", twitter(), long_ago, time(0, 1));
        assert!(post.is_ok());
    }

    #[test]
    fn test_construct_keeps_content_untrimmed() {
        let post = Post::construct("  padded  ", twitter(), date(), time(9, 0)).unwrap();
        assert_eq!(post.content(), "  padded  ");
    }

    #[test]
    fn test_construct_generates_distinct_ids() {
        let a = Post::construct("a", twitter(), date(), time(9, 0)).unwrap();
        let b = Post::construct("a", twitter(), date(), time(9, 0)).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_mark_posted_is_monotonic() {
        let mut post = Post::construct("Hello", twitter(), date(), time(9, 0)).unwrap();
        assert!(post.mark_posted());
        assert!(!post.mark_posted());
        assert_eq!(post.status(), PostStatus::Posted);
    }

    #[test]
    fn test_post_id_parse() {
        let id = PostId::new();
        let parsed: PostId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<PostId>().is_err());
    }

    #[test]
    fn test_post_serializes_status_lowercase() {
        let post = Post::construct("Hello", twitter(), date(), time(9, 0)).unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["platforms"][0], "twitter");
        assert_eq!(json["scheduled_at"], "2026-03-14T09:00:00");
    }
}
