// principal.rs — Principal: the resolved, authenticated actor.
//
// A principal arrives fully formed from the authentication layer: a
// username, the capability tokens it was granted, and the friend set its
// identity provider reported. The core never builds one itself outside
// tests, and never mutates one mid-operation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An authenticated actor: username plus granted capabilities and friends.
///
/// Fields are private so a principal stays exactly what authentication
/// resolved. The builder methods exist for the layer that mints principals
/// (and for tests).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    username: String,
    #[serde(default)]
    capabilities: BTreeSet<String>,
    #[serde(default)]
    friends: BTreeSet<String>,
}

impl Principal {
    /// Create a principal with no capabilities and no friends.
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        debug_assert!(!username.is_empty(), "principal username must be non-empty");
        Self {
            username,
            capabilities: BTreeSet::new(),
            friends: BTreeSet::new(),
        }
    }

    /// Grant a capability token.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Record a friend relationship reported by the identity provider.
    pub fn with_friend(mut self, username: impl Into<String>) -> Self {
        self.friends.insert(username.into());
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Membership test for an opaque capability token.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// The friend usernames stamped on this principal at authentication.
    pub fn friends(&self) -> &BTreeSet<String> {
        &self.friends
    }
}
