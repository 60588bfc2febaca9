//! Seed records: the construction inputs for the stores.
//!
//! Records carry only stored fields. Derived facts (follow/like counts,
//! current-user relationships) live on the entities the stores build
//! from these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ident::{PostId, UserId};

/// Seed data for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Unique identifier within the users store.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Avatar location, if the user has one. Opaque, never dereferenced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Seed data for one post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostRecord {
    /// Unique identifier within the posts store.
    pub id: PostId,
    /// Author's user id. May reference a user unknown to the users store.
    pub author: UserId,
    /// Post text.
    pub description: String,
    /// Image location. Opaque, never dereferenced.
    pub image_url: String,
    /// Creation timestamp.
    pub created_time: DateTime<Utc>,
}
