//! Posts store: canonical post set plus the like relation.
//!
//! Mirrors the users store for the user→post like relation. There is no
//! "self" anchor precondition: the current user need not have authored
//! anything, so any current-user id is accepted. A like only ever
//! changes the liked post's derived facts, so mutations resynchronize
//! exactly one entity.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use gramstore_core::{PostId, PostRecord, PostView, StoreError, StoreResult, UserId};

use crate::relation::RelationTable;

/// The like relation: `(user, post)`.
pub type LikeTable = RelationTable<UserId, PostId>;

/// One post: seed fields plus a snapshot of the like relation.
#[derive(Debug, Clone)]
pub struct Post {
    record: PostRecord,
    likes: LikeTable,
    current_user: UserId,
}

impl Post {
    fn new(record: PostRecord, likes: LikeTable, current_user: UserId) -> Self {
        Post {
            record,
            likes,
            current_user,
        }
    }

    /// Replace the held snapshot. Called by the owning store only.
    fn set_likes(&mut self, likes: LikeTable) {
        self.likes = likes;
    }

    fn liked_by_current_user(&self) -> bool {
        self.likes.contains(self.current_user, self.record.id)
    }

    fn liked_by_count(&self) -> usize {
        self.likes.count_to(self.record.id)
    }
}

/// Shared handle to one post. Stays current across mutations.
#[derive(Debug, Clone)]
pub struct PostHandle {
    inner: Arc<RwLock<Post>>,
}

impl PostHandle {
    fn new(inner: Arc<RwLock<Post>>) -> Self {
        PostHandle { inner }
    }
}

impl PostView for PostHandle {
    fn id(&self) -> PostId {
        self.inner.read().record.id
    }

    fn author(&self) -> UserId {
        self.inner.read().record.author
    }

    fn description(&self) -> String {
        self.inner.read().record.description.clone()
    }

    fn image_url(&self) -> String {
        self.inner.read().record.image_url.clone()
    }

    fn created_time(&self) -> DateTime<Utc> {
        self.inner.read().record.created_time
    }

    fn liked_by_current_user(&self) -> bool {
        self.inner.read().liked_by_current_user()
    }

    fn liked_by_count(&self) -> usize {
        self.inner.read().liked_by_count()
    }
}

/// Canonical post set plus the like relation, queried relative to a
/// fixed current user.
#[derive(Debug)]
pub struct PostsStore {
    current_user: UserId,
    /// Canonical like table. Entity snapshots are clones of this.
    likes: LikeTable,
    /// Entity arena in seed order.
    posts: Vec<Arc<RwLock<Post>>>,
    /// id → arena index.
    index: HashMap<PostId, usize>,
}

impl PostsStore {
    /// Build a store from seed records, an initial like table, and the
    /// current-user id.
    ///
    /// Fails only on duplicate seed ids. Duplicate pairs in the seed
    /// table are dropped (first wins).
    pub fn new(
        seeds: Vec<PostRecord>,
        likes: Vec<(UserId, PostId)>,
        current_user: UserId,
    ) -> StoreResult<Self> {
        let mut index = HashMap::with_capacity(seeds.len());
        for (pos, record) in seeds.iter().enumerate() {
            if index.insert(record.id, pos).is_some() {
                return Err(StoreError::DuplicateId {
                    id: record.id.raw(),
                });
            }
        }

        let likes = LikeTable::from_pairs(likes);
        let posts = seeds
            .into_iter()
            .map(|record| Arc::new(RwLock::new(Post::new(record, likes.clone(), current_user))))
            .collect();

        Ok(PostsStore {
            current_user,
            likes,
            posts,
            index,
        })
    }

    /// Number of posts.
    pub fn count(&self) -> usize {
        self.posts.len()
    }

    /// Look up a post by id.
    pub fn post(&self, id: PostId) -> Option<PostHandle> {
        self.index
            .get(&id)
            .map(|&pos| PostHandle::new(Arc::clone(&self.posts[pos])))
    }

    /// All posts by `author`, in seed order.
    ///
    /// The author id is not validated against any user set; an unknown
    /// author simply matches nothing.
    pub fn find_posts_by_author(&self, author: UserId) -> Vec<PostHandle> {
        self.posts
            .iter()
            .filter(|post| post.read().record.author == author)
            .map(|post| PostHandle::new(Arc::clone(post)))
            .collect()
    }

    /// All posts whose description contains `query`.
    ///
    /// Exact, case-sensitive byte containment; an empty query matches
    /// every post. Results come back in seed order.
    pub fn find_posts_by_text(&self, query: &str) -> Vec<PostHandle> {
        self.posts
            .iter()
            .filter(|post| post.read().record.description.contains(query))
            .map(|post| PostHandle::new(Arc::clone(post)))
            .collect()
    }

    /// Record that the current user likes the post `id`.
    ///
    /// Returns false if `id` is unknown. Liking a post twice is an
    /// idempotent no-op that still reports success.
    pub fn like_post(&mut self, id: PostId) -> bool {
        if !self.index.contains_key(&id) {
            tracing::debug!(post = %id, "like rejected: unknown post");
            return false;
        }
        if !self.likes.insert(self.current_user, id) {
            tracing::debug!(post = %id, "like no-op: already liked");
            return true;
        }
        self.sync(id);
        tracing::debug!(post = %id, "like recorded");
        true
    }

    /// Remove the current user's like of the post `id`.
    ///
    /// Returns false if `id` is unknown. Unliking a post that was never
    /// liked is a no-op that still reports success.
    pub fn unlike_post(&mut self, id: PostId) -> bool {
        if !self.index.contains_key(&id) {
            tracing::debug!(post = %id, "unlike rejected: unknown post");
            return false;
        }
        if self.likes.remove(self.current_user, id) {
            self.sync(id);
            tracing::debug!(post = %id, "unlike recorded");
        } else {
            tracing::debug!(post = %id, "unlike no-op: not liked");
        }
        true
    }

    /// Ids of the users who liked the post `id`, in table order. None
    /// if `id` is unknown.
    ///
    /// Returns raw ids rather than user entities: this store holds no
    /// reference to the users store.
    pub fn users_liked_post(&self, id: PostId) -> Option<Vec<UserId>> {
        if !self.index.contains_key(&id) {
            return None;
        }
        Some(self.likes.sources_of(id).collect())
    }

    /// Push the canonical table into the entity named by `id`.
    ///
    /// A like touches a single post; no other entity's derived facts
    /// can change.
    fn sync(&self, id: PostId) {
        if let Some(&pos) = self.index.get(&id) {
            self.posts[pos].write().set_likes(self.likes.clone());
        }
    }
}
