//! Ordering and aggregation over the post store
//!
//! Nothing here is cached. Every call walks the store's current contents,
//! so reads always reflect the latest mutation.

use serde::Serialize;
use std::collections::HashSet;

use crate::store::PostStore;
use crate::types::{Post, PostStatus};

/// Summary counters for the current collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub total: usize,
    pub pending: usize,
    pub posted: usize,
    /// Number of distinct platforms across all posts, posted or not
    pub distinct_platforms: usize,
}

/// Read-only view over a [`PostStore`]
#[derive(Debug, Clone, Copy)]
pub struct QueueView<'a> {
    store: &'a PostStore,
}

impl<'a> QueueView<'a> {
    pub fn new(store: &'a PostStore) -> Self {
        Self { store }
    }

    /// Posts sorted ascending by scheduled time
    ///
    /// The sort is stable, so posts scheduled for the same instant keep their
    /// insertion order.
    pub fn ordered(&self) -> Vec<&'a Post> {
        let mut posts: Vec<&Post> = self.store.all().iter().collect();
        posts.sort_by_key(|p| p.scheduled_at());
        posts
    }

    pub fn stats(&self) -> QueueStats {
        let mut stats = QueueStats::default();
        let mut platforms = HashSet::new();

        for post in self.store.all() {
            stats.total += 1;
            match post.status() {
                PostStatus::Pending => stats.pending += 1,
                PostStatus::Posted => stats.posted += 1,
            }
            platforms.extend(post.platforms().iter());
        }

        stats.distinct_platforms = platforms.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::{Platform, PlatformSet};
    use chrono::{NaiveDate, NaiveTime};

    fn post_at(content: &str, hour: u32, platforms: Vec<Platform>) -> Post {
        Post::construct(
            content,
            PlatformSet::from(platforms),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_ordered_on_empty_store() {
        let store = PostStore::new();
        assert!(QueueView::new(&store).ordered().is_empty());
    }

    #[test]
    fn test_ordered_sorts_ascending() {
        let mut store = PostStore::new();
        store.insert(post_at("late", 18, vec![Platform::Twitter]));
        store.insert(post_at("early", 6, vec![Platform::Twitter]));
        store.insert(post_at("noon", 12, vec![Platform::Twitter]));

        let contents: Vec<_> = QueueView::new(&store)
            .ordered()
            .iter()
            .map(|p| p.content())
            .collect();
        assert_eq!(contents, vec!["early", "noon", "late"]);
    }

    #[test]
    fn test_ordered_keeps_insertion_order_for_ties() {
        let mut store = PostStore::new();
        store.insert(post_at("first", 9, vec![Platform::Twitter]));
        store.insert(post_at("second", 9, vec![Platform::Facebook]));
        store.insert(post_at("third", 9, vec![Platform::Instagram]));

        let contents: Vec<_> = QueueView::new(&store)
            .ordered()
            .iter()
            .map(|p| p.content())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ordered_does_not_reorder_store() {
        let mut store = PostStore::new();
        store.insert(post_at("late", 18, vec![Platform::Twitter]));
        store.insert(post_at("early", 6, vec![Platform::Twitter]));

        let _ = QueueView::new(&store).ordered();
        assert_eq!(store.all()[0].content(), "late");
    }

    #[test]
    fn test_stats_on_empty_store() {
        let store = PostStore::new();
        assert_eq!(QueueView::new(&store).stats(), QueueStats::default());
    }

    #[test]
    fn test_stats_counts_distinct_platforms() {
        let mut store = PostStore::new();
        store.insert(post_at("a", 9, vec![Platform::Twitter, Platform::Facebook]));
        store.insert(post_at("b", 10, vec![Platform::Twitter]));
        store.insert(post_at("c", 11, vec![Platform::Facebook, Platform::Linkedin]));

        let stats = QueueView::new(&store).stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.distinct_platforms, 3);
    }

    #[test]
    fn test_stats_partitions_by_status() {
        let mut store = PostStore::new();
        let a = post_at("a", 9, vec![Platform::Twitter]);
        let a_id = a.id();
        store.insert(a);
        store.insert(post_at("b", 10, vec![Platform::Instagram]));
        store.mark_posted(&a_id);

        let stats = QueueView::new(&store).stats();
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.posted, 1);
        assert_eq!(stats.pending + stats.posted, stats.total);
        assert_eq!(stats.distinct_platforms, 2);
    }

    #[test]
    fn test_stats_recomputes_after_delete() {
        let mut store = PostStore::new();
        let a = post_at("a", 9, vec![Platform::Linkedin]);
        let a_id = a.id();
        store.insert(a);
        store.insert(post_at("b", 10, vec![Platform::Twitter]));

        store.delete(&a_id);

        let stats = QueueView::new(&store).stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.distinct_platforms, 1);
    }
}
