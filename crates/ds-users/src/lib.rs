//! # ds-users
//!
//! Static directory of example users for the document editor demo.
//!
//! Four fixed records illustrate access-control tiers (review groups, comment
//! groups, denied actions). The directory answers three read-only queries:
//! all users, one user by id, and a contact list of the others.

pub mod model;
pub mod data;
pub mod directory;

pub use data::{EXAMPLE_USERS, FALLBACK_USER_ID, GUEST_USER_ID};
pub use directory::{Lookup, UserDirectory, LOOKUP_LOG_DESTINATION};
pub use model::{CommentAction, CommentPermissions, DeniedAction, Ternary, UserRecord, UserSummary};
