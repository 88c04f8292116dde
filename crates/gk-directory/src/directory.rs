//! Core FriendDirectory trait and the user record shape

use std::collections::BTreeSet;

use gk_policy::Principal;
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// One user as the directory knows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// The username goals and principals reference.
    pub username: String,

    /// Human-readable display name, if the user set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Usernames this user counts as friends. No reciprocity implied;
    /// directionality is whatever the backing directory says.
    #[serde(default)]
    pub friends: BTreeSet<String>,
}

impl UserRecord {
    /// Create a record with no display name and no friends.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
            friends: BTreeSet::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Add a friend username.
    pub fn with_friend(mut self, username: impl Into<String>) -> Self {
        self.friends.insert(username.into());
        self
    }
}

/// Pluggable lookup of display names and friend sets.
///
/// The sharing fan-out and the list enrichment are directory consumers.
/// Lookups are fallible because real backends sit behind I/O; a lookup
/// failure fails the whole operation rather than degrading silently.
pub trait FriendDirectory {
    /// The display name registered for `username`, if any.
    fn display_name_of(&self, username: &str) -> Result<Option<String>, DirectoryError>;

    /// The friend usernames of the given principal. Unknown principals
    /// have no friends, which is an empty set, not an error.
    fn friends_of(&self, principal: &Principal) -> Result<BTreeSet<String>, DirectoryError>;
}
