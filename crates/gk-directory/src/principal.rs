//! Principal-backed directory - trusts the friend set on the token itself

use std::collections::BTreeSet;

use gk_policy::Principal;

use crate::directory::FriendDirectory;
use crate::error::DirectoryError;

/// Directory that answers from the principal alone (v0.2.2).
///
/// Deployments whose authentication layer already stamps friend sets onto
/// the principal use this instead of a separate user store. It resolves no
/// display names, so list enrichment falls back to the placeholder for
/// every owner.
pub struct PrincipalDirectory;

impl PrincipalDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrincipalDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendDirectory for PrincipalDirectory {
    fn display_name_of(&self, _username: &str) -> Result<Option<String>, DirectoryError> {
        Ok(None)
    }

    fn friends_of(&self, principal: &Principal) -> Result<BTreeSet<String>, DirectoryError> {
        Ok(principal.friends().clone())
    }
}
