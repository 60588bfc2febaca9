//! Storage layer for gramstore.
//!
//! Two independent stores — users with the follow relation, posts with
//! the like relation — each owning its canonical relation table and an
//! arena of entities. Entities hold a snapshot of the table plus the
//! fixed current-user id; the stores keep every issued handle's
//! snapshot synchronized with the canonical table across mutations.
//!
//! The stores never reference each other. Relation pairs may name ids
//! that live on the other side (a like names a user the posts store has
//! never seen); those pairs are carried verbatim and never validated.

pub mod posts;
pub mod relation;
pub mod users;

pub use posts::{LikeTable, Post, PostHandle, PostsStore};
pub use relation::RelationTable;
pub use users::{FollowerTable, User, UserHandle, UsersStore};
