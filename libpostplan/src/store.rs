//! Post store
//!
//! The authoritative in-memory collection of committed posts. A store is a
//! plain owned value: hand it around by reference, create as many as needed.
//!
//! Mutations on ids that are not present are silent no-ops so that repeated
//! or out-of-order UI events are safe to replay.

use tracing::debug;

use crate::types::{Post, PostId};

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a post
    ///
    /// The post already satisfies the content and platform invariants, since
    /// [`Post::construct`] is the only way to build one.
    pub fn insert(&mut self, post: Post) {
        debug!(
            post_id = %post.id(),
            platforms = %post.platforms(),
            scheduled_at = %post.scheduled_at(),
            "Inserting post"
        );
        self.posts.push(post);
    }

    /// Remove the post with this id
    ///
    /// Returns `true` if a post was removed. Deleting an absent id does
    /// nothing.
    pub fn delete(&mut self, id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id() != *id);
        let removed = self.posts.len() != before;

        if removed {
            debug!(post_id = %id, "Deleted post");
        } else {
            debug!(post_id = %id, "Delete ignored: no such post");
        }
        removed
    }

    /// Move a pending post to posted
    ///
    /// Returns `true` if the status changed. Absent ids and posts that are
    /// already posted are left alone.
    pub fn mark_posted(&mut self, id: &PostId) -> bool {
        match self.posts.iter_mut().find(|p| p.id() == *id) {
            Some(post) => {
                let changed = post.mark_posted();
                if changed {
                    debug!(post_id = %id, "Marked post as posted");
                } else {
                    debug!(post_id = %id, "Mark ignored: already posted");
                }
                changed
            }
            None => {
                debug!(post_id = %id, "Mark ignored: no such post");
                false
            }
        }
    }

    /// Live collection, in insertion order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::{Platform, PlatformSet};
    use crate::types::PostStatus;
    use chrono::{NaiveDate, NaiveTime};

    fn make_post(content: &str) -> Post {
        Post::construct(
            content,
            PlatformSet::from(vec![Platform::Twitter]),
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_appends() {
        let mut store = PostStore::new();
        store.insert(make_post("one"));
        store.insert(make_post("two"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].content(), "one");
        assert_eq!(store.all()[1].content(), "two");
    }

    #[test]
    fn test_delete_removes_post() {
        let mut store = PostStore::new();
        let post = make_post("doomed");
        let id = post.id();
        store.insert(post);

        assert!(store.delete(&id));
        assert!(store.is_empty());
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut store = PostStore::new();
        let post = make_post("doomed");
        let id = post.id();
        store.insert(post);
        store.insert(make_post("survivor"));

        assert!(store.delete(&id));
        assert!(!store.delete(&id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].content(), "survivor");
    }

    #[test]
    fn test_delete_on_empty_store() {
        let mut store = PostStore::new();
        assert!(!store.delete(&PostId::new()));
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_mark_posted_is_idempotent() {
        let mut store = PostStore::new();
        let post = make_post("ship it");
        let id = post.id();
        store.insert(post);

        assert!(store.mark_posted(&id));
        assert!(!store.mark_posted(&id));
        assert_eq!(store.get(&id).unwrap().status(), PostStatus::Posted);
    }

    #[test]
    fn test_mark_posted_after_delete_does_not_resurrect() {
        let mut store = PostStore::new();
        let post = make_post("gone");
        let id = post.id();
        store.insert(post);
        store.delete(&id);

        assert!(!store.mark_posted(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mark_posted_only_touches_target() {
        let mut store = PostStore::new();
        let first = make_post("first");
        let second = make_post("second");
        let first_id = first.id();
        store.insert(first);
        store.insert(second);

        store.mark_posted(&first_id);

        assert_eq!(store.all()[0].status(), PostStatus::Posted);
        assert_eq!(store.all()[1].status(), PostStatus::Pending);
    }
}
