//! gramstore — an in-memory social-graph data layer.
//!
//! Models a minimal social-media domain: users, posts, a follow
//! relation between users, and a like relation between users and posts.
//! Every query is answered relative to a fixed current-user context
//! chosen at store construction.
//!
//! # Example
//!
//! ```
//! use gramstore::{UserId, UserRecord, UsersStore, UserView};
//!
//! let seeds = vec![
//!     UserRecord {
//!         id: UserId::new(1),
//!         username: "ada".into(),
//!         full_name: "Ada Lovelace".into(),
//!         avatar_url: None,
//!     },
//!     UserRecord {
//!         id: UserId::new(2),
//!         username: "grace".into(),
//!         full_name: "Grace Hopper".into(),
//!         avatar_url: None,
//!     },
//! ];
//! let mut users = UsersStore::new(seeds, vec![], UserId::new(1)).unwrap();
//!
//! let grace = users.user(UserId::new(2)).unwrap();
//! assert!(users.follow(UserId::new(2)));
//! // The handle obtained before the mutation stays current.
//! assert!(grace.followed_by_current_user());
//! ```

pub use gramstore_core::{
    Id, PostId, PostRecord, PostTag, PostView, StoreError, StoreResult, UserId, UserRecord,
    UserTag, UserView,
};
pub use gramstore_store::{
    FollowerTable, LikeTable, Post, PostHandle, PostsStore, RelationTable, User, UserHandle,
    UsersStore,
};
