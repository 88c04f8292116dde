//! # gk-service
//!
//! The goal operations: listing, reading, creating, revising, completing,
//! and sharing, each behind capability and ownership checks.
//!
//! ## Key components
//!
//! - [`GoalService`]: the six operations over a goal store and a user
//!   directory
//! - [`SharingCoordinator`]: fan-out of a shared goal to the sharer's
//!   friends
//! - [`ServiceConfig`]: file locations for the JSON-backed service
//! - [`ServiceError`]: forbidden operations and collaborator failures
//!
//! ## Key invariants
//!
//! - Capability gates run before any store access.
//! - Ownership gates run after mutations and only shape the returned
//!   view; a withheld view is indistinguishable from a missing record.
//! - The share fan-out commits all of its records or none.

pub mod config;
pub mod error;
pub mod service;
pub mod share;

pub use config::{ConfigError, ServiceConfig};
pub use error::ServiceError;
pub use service::GoalService;
pub use share::SharingCoordinator;
