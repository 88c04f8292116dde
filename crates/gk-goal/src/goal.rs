// goal.rs — Goal: the per-user record everything else revolves around.
//
// A goal belongs to exactly one owner. The id and owner never change once
// the record exists: sharing a goal creates new records owned by the
// recipients instead of reassigning this one, and nothing in this crate
// deletes a goal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single goal record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Unique identifier, assigned at construction.
    pub id: Uuid,

    /// Username of the owning user. Immutable after creation.
    pub owner: String,

    /// The goal text (e.g., "Run 5k").
    pub text: String,

    /// Whether the goal has been completed.
    pub completed: bool,

    /// When this goal was created.
    pub created_at: DateTime<Utc>,

    /// When this goal was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new, not-yet-completed goal owned by `owner`.
    pub fn new(owner: impl Into<String>, text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            text: text.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
