//! # gk-directory
//!
//! User directory lookups for Goalkeeper: display names and friend sets.
//!
//! The [`FriendDirectory`] trait is the seam between the goal service and
//! whatever actually knows the users. Sharing asks it who a principal's
//! friends are; list enrichment asks it for owner display names.
//!
//! ## Key components
//!
//! - [`FriendDirectory`] — the lookup contract
//! - [`UserRecord`] — the record shape directory backends store
//! - [`MemoryDirectory`] — map of records, for tests and embedding
//! - [`JsonDirectory`] — records loaded once from a JSON file
//! - [`PrincipalDirectory`] — trusts the friend set stamped on the
//!   principal at authentication, resolves no display names

pub mod directory;
pub mod error;
pub mod json;
pub mod memory;
pub mod principal;

pub use directory::{FriendDirectory, UserRecord};
pub use error::DirectoryError;
pub use json::JsonDirectory;
pub use memory::MemoryDirectory;
pub use principal::PrincipalDirectory;
