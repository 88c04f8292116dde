//! # gk-policy
//!
//! Principals, capabilities, and authorization decisions for Goalkeeper.
//!
//! Implements the two-phase authorization model: a coarse capability gate
//! evaluated before an operation touches the store, and a fine-grained
//! ownership predicate evaluated against the fetched goal afterwards.
//! [`GoalPolicy`] only answers booleans — translating a denied coarse gate
//! into Forbidden, or a failed fine gate into a withheld "not found" view,
//! is the service layer's job.
//!
//! ## Key invariants
//!
//! - **Coarse before store**: a principal without the operation's
//!   capability never reaches persistence.
//! - **Fine gates hide, not reveal**: a failed ownership check is
//!   indistinguishable from a missing record.
//! - **Reads are ownership-free**: "goal:read" fetches any goal by id.

pub mod capability;
pub mod policy;
pub mod principal;

pub use policy::GoalPolicy;
pub use principal::Principal;
