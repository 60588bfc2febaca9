//! Error types for store construction.
//!
//! The failure taxonomy is deliberately small. Not-found is never an
//! error: lookups signal absence with `None` and mutations on unknown
//! targets return `false`. Only construction can fail.

use thiserror::Error;

use crate::ident::UserId;

/// Result alias for store construction.
pub type StoreResult<T> = Result<T, StoreError>;

/// A store could not be constructed from its seed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The users store requires the current user among its seeds.
    #[error("current user {id} is not present in the seed records")]
    CurrentUserMissing {
        /// The current-user id that had no matching seed.
        id: UserId,
    },

    /// Two seed records share an identifier.
    #[error("duplicate seed id {id}")]
    DuplicateId {
        /// The raw value of the colliding identifier.
        id: u64,
    },
}
