//! Core types for gramstore.
//!
//! This crate defines the vocabulary shared by the storage crates:
//! kind-tagged identifiers, seed records, the entity capability traits,
//! and the construction error type. It holds no storage logic.

pub mod error;
pub mod ident;
pub mod record;
pub mod view;

pub use error::{StoreError, StoreResult};
pub use ident::{Id, PostId, PostTag, UserId, UserTag};
pub use record::{PostRecord, UserRecord};
pub use view::{PostView, UserView};
