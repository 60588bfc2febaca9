//! Kind-tagged entity identifiers.
//!
//! `Id<K>` wraps a raw `u64` together with a phantom kind marker, so a
//! user id and a post id are distinct types even when the raw values
//! collide. Cross-kind comparison does not compile; within a kind, two
//! ids are equal iff their raw values are equal.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind marker for user identifiers.
#[derive(Debug)]
pub enum UserTag {}

/// Kind marker for post identifiers.
#[derive(Debug)]
pub enum PostTag {}

/// Identifier for one user.
pub type UserId = Id<UserTag>;

/// Identifier for one post.
pub type PostId = Id<PostTag>;

/// A typed identifier: raw scalar plus a phantom entity-kind tag.
///
/// Trait impls are written by hand so `K` never needs to satisfy any
/// bounds (derives would require `K: Clone`, `K: PartialEq`, and so on).
pub struct Id<K> {
    raw: u64,
    _kind: PhantomData<K>,
}

impl<K> Id<K> {
    /// Create an identifier from its raw value.
    pub const fn new(raw: u64) -> Self {
        Id {
            raw,
            _kind: PhantomData,
        }
    }

    /// The raw scalar value.
    pub const fn raw(&self) -> u64 {
        self.raw
    }
}

impl<K> Clone for Id<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Id<K> {}

impl<K> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for Id<K> {}

impl<K> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K> PartialOrd for Id<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Id<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<K> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.raw)
    }
}

impl<K> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl<K> From<u64> for Id<K> {
    fn from(raw: u64) -> Self {
        Id::new(raw)
    }
}

impl<K> Serialize for Id<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.raw)
    }
}

impl<'de, K> Deserialize<'de> for Id<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Id::new)
    }
}
