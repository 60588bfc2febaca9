//! Capability traits for reading entities.
//!
//! Stores hand out handle types that implement these traits; callers
//! written against the traits depend only on the capability set, not on
//! a concrete representation. Derived facts are recomputed from the
//! entity's relation snapshot on every call, never cached.

use chrono::{DateTime, Utc};

use crate::ident::{PostId, UserId};

/// Read surface of one user.
pub trait UserView {
    /// The user's identifier.
    fn id(&self) -> UserId;
    /// Login name.
    fn username(&self) -> String;
    /// Display name.
    fn full_name(&self) -> String;
    /// Avatar location, if any.
    fn avatar_url(&self) -> Option<String>;
    /// Does the current user follow this user?
    fn followed_by_current_user(&self) -> bool;
    /// Does this user follow the current user?
    fn follows_current_user(&self) -> bool;
    /// How many users does this user follow?
    fn follows_count(&self) -> usize;
    /// How many users follow this user?
    fn followed_by_count(&self) -> usize;
}

/// Read surface of one post.
pub trait PostView {
    /// The post's identifier.
    fn id(&self) -> PostId;
    /// The author's user id.
    fn author(&self) -> UserId;
    /// Post text.
    fn description(&self) -> String;
    /// Image location.
    fn image_url(&self) -> String;
    /// Creation timestamp.
    fn created_time(&self) -> DateTime<Utc>;
    /// Does the current user like this post?
    fn liked_by_current_user(&self) -> bool;
    /// How many users like this post?
    fn liked_by_count(&self) -> usize;
}
