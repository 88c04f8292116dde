//! # gk-goal
//!
//! Goal records and persistence for Goalkeeper.
//!
//! A [`Goal`] is the unit everything else operates on: one record, one
//! owner, some text, a completion flag. The [`GoalStore`] trait is the
//! persistence seam the service layer is written against.
//!
//! ## Key components
//!
//! - [`Goal`] — the per-user record (id, owner, text, completed)
//! - [`GoalStore`] — the storage contract, including the `transact`
//!   rollback boundary mutating operations run inside
//! - [`MemoryGoalStore`] — Vec-backed reference implementation
//! - [`JsonGoalStore`] — one JSON file per goal on disk

pub mod error;
pub mod goal;
pub mod json;
pub mod store;

pub use error::StoreError;
pub use goal::Goal;
pub use json::JsonGoalStore;
pub use store::{GoalStore, MemoryGoalStore};
