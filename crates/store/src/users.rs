//! Users store: canonical user set plus the follow relation.
//!
//! The store owns the canonical follower table and an arena of user
//! entities. Each entity holds its own snapshot of the table together
//! with the fixed current-user id, and computes its derived facts from
//! that snapshot on access. Mutations update the canonical table first,
//! then push the new table into exactly the entities whose derived
//! facts could have changed (the current user and the target), so
//! previously issued handles stay current without re-fetching.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use gramstore_core::{StoreError, StoreResult, UserId, UserRecord, UserView};

use crate::relation::RelationTable;

/// The follow relation: `(follower, followee)`.
pub type FollowerTable = RelationTable<UserId, UserId>;

/// One user: seed fields plus a snapshot of the follow relation.
#[derive(Debug, Clone)]
pub struct User {
    record: UserRecord,
    followers: FollowerTable,
    current_user: UserId,
}

impl User {
    fn new(record: UserRecord, followers: FollowerTable, current_user: UserId) -> Self {
        User {
            record,
            followers,
            current_user,
        }
    }

    fn id(&self) -> UserId {
        self.record.id
    }

    /// Replace the held snapshot. Called by the owning store only.
    fn set_followers(&mut self, followers: FollowerTable) {
        self.followers = followers;
    }

    fn followed_by_current_user(&self) -> bool {
        self.followers.contains(self.current_user, self.record.id)
    }

    fn follows_current_user(&self) -> bool {
        self.followers.contains(self.record.id, self.current_user)
    }

    fn follows_count(&self) -> usize {
        self.followers.count_from(self.record.id)
    }

    fn followed_by_count(&self) -> usize {
        self.followers.count_to(self.record.id)
    }
}

/// Shared handle to one user.
///
/// Handles are cheap to clone and stay live across mutations: accessors
/// read the entity as it is now, so a handle obtained before a
/// `follow` call observes the updated counts afterwards.
#[derive(Debug, Clone)]
pub struct UserHandle {
    inner: Arc<RwLock<User>>,
}

impl UserHandle {
    fn new(inner: Arc<RwLock<User>>) -> Self {
        UserHandle { inner }
    }
}

impl UserView for UserHandle {
    fn id(&self) -> UserId {
        self.inner.read().id()
    }

    fn username(&self) -> String {
        self.inner.read().record.username.clone()
    }

    fn full_name(&self) -> String {
        self.inner.read().record.full_name.clone()
    }

    fn avatar_url(&self) -> Option<String> {
        self.inner.read().record.avatar_url.clone()
    }

    fn followed_by_current_user(&self) -> bool {
        self.inner.read().followed_by_current_user()
    }

    fn follows_current_user(&self) -> bool {
        self.inner.read().follows_current_user()
    }

    fn follows_count(&self) -> usize {
        self.inner.read().follows_count()
    }

    fn followed_by_count(&self) -> usize {
        self.inner.read().followed_by_count()
    }
}

/// Canonical user set plus the follow relation, queried relative to a
/// fixed current user.
#[derive(Debug)]
pub struct UsersStore {
    current_user: UserId,
    /// Canonical follow table. Entity snapshots are clones of this.
    followers: FollowerTable,
    /// Entity arena in seed order.
    users: Vec<Arc<RwLock<User>>>,
    /// id → arena index.
    index: HashMap<UserId, usize>,
}

impl UsersStore {
    /// Build a store from seed records, an initial follower table, and
    /// the current-user id.
    ///
    /// Fails if two seeds share an id, or if no seed matches
    /// `current_user` — the store cannot exist without a "self" anchor.
    /// Duplicate pairs in the seed table are dropped (first wins).
    pub fn new(
        seeds: Vec<UserRecord>,
        followers: Vec<(UserId, UserId)>,
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
        if !index.contains_key(&current_user) {
            return Err(StoreError::CurrentUserMissing { id: current_user });
        }

        let followers = FollowerTable::from_pairs(followers);
        let users = seeds
            .into_iter()
            .map(|record| Arc::new(RwLock::new(User::new(record, followers.clone(), current_user))))
            .collect();

        Ok(UsersStore {
            current_user,
            followers,
            users,
            index,
        })
    }

    /// Number of users.
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// The user the store was anchored to. Guaranteed to exist.
    pub fn current_user(&self) -> UserHandle {
        // Membership was checked at construction.
        self.user(self.current_user)
            .unwrap_or_else(|| unreachable!("current user validated at construction"))
    }

    /// Look up a user by id.
    pub fn user(&self, id: UserId) -> Option<UserHandle> {
        self.index
            .get(&id)
            .map(|&pos| UserHandle::new(Arc::clone(&self.users[pos])))
    }

    /// All users whose username or full name contains `query`.
    ///
    /// Exact, case-sensitive byte containment; an empty query matches
    /// every user. Results come back in seed order.
    pub fn find_users(&self, query: &str) -> Vec<UserHandle> {
        self.users
            .iter()
            .filter(|user| {
                let user = user.read();
                user.record.username.contains(query) || user.record.full_name.contains(query)
            })
            .map(|user| UserHandle::new(Arc::clone(user)))
            .collect()
    }

    /// Record that the current user follows `target`.
    ///
    /// Returns false if `target` is unknown. Following a user twice is
    /// an idempotent no-op that still reports success.
    pub fn follow(&mut self, target: UserId) -> bool {
        if !self.index.contains_key(&target) {
            tracing::debug!(user = %target, "follow rejected: unknown target");
            return false;
        }
        if !self.followers.insert(self.current_user, target) {
            tracing::debug!(user = %target, "follow no-op: already following");
            return true;
        }
        self.sync(&[self.current_user, target]);
        tracing::debug!(user = %target, "follow recorded");
        true
    }

    /// Remove the current user's follow of `target`.
    ///
    /// Returns false if `target` is unknown. Unfollowing a user who was
    /// never followed is a no-op that still reports success.
    pub fn unfollow(&mut self, target: UserId) -> bool {
        if !self.index.contains_key(&target) {
            tracing::debug!(user = %target, "unfollow rejected: unknown target");
            return false;
        }
        if self.followers.remove(self.current_user, target) {
            self.sync(&[self.current_user, target]);
            tracing::debug!(user = %target, "unfollow recorded");
        } else {
            tracing::debug!(user = %target, "unfollow no-op: not following");
        }
        true
    }

    /// Users who follow `id`, in table order. None if `id` is unknown.
    ///
    /// Followers recorded in the table but absent from this store's
    /// entity set are skipped.
    pub fn users_following(&self, id: UserId) -> Option<Vec<UserHandle>> {
        if !self.index.contains_key(&id) {
            return None;
        }
        Some(
            self.followers
                .sources_of(id)
                .filter_map(|follower| self.user(follower))
                .collect(),
        )
    }

    /// Users whom `id` follows, in table order. None if `id` is unknown.
    pub fn users_followed_by(&self, id: UserId) -> Option<Vec<UserHandle>> {
        if !self.index.contains_key(&id) {
            return None;
        }
        Some(
            self.followers
                .targets_of(id)
                .filter_map(|followee| self.user(followee))
                .collect(),
        )
    }

    /// Push the canonical table into the entities named by `ids`.
    ///
    /// Only the entities a mutation touched need refreshing; everyone
    /// else's derived facts are unchanged.
    fn sync(&self, ids: &[UserId]) {
        for id in ids {
            if let Some(&pos) = self.index.get(id) {
                self.users[pos].write().set_followers(self.followers.clone());
            }
        }
    }
}
