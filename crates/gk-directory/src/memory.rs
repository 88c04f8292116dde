//! In-memory directory backed by a map of user records

use std::collections::{BTreeMap, BTreeSet};

use gk_policy::Principal;

use crate::directory::{FriendDirectory, UserRecord};
use crate::error::DirectoryError;

/// Directory holding user records in memory, keyed by username.
///
/// Tests and single-process embedders use this directly; the JSON-backed
/// directory delegates to it after loading records from disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    records: BTreeMap<String, UserRecord>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any existing one for the same username.
    pub fn with_record(mut self, record: UserRecord) -> Self {
        self.insert(record);
        self
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, record: UserRecord) {
        self.records.insert(record.username.clone(), record);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FriendDirectory for MemoryDirectory {
    fn display_name_of(&self, username: &str) -> Result<Option<String>, DirectoryError> {
        Ok(self
            .records
            .get(username)
            .and_then(|record| record.display_name.clone()))
    }

    fn friends_of(&self, principal: &Principal) -> Result<BTreeSet<String>, DirectoryError> {
        Ok(self
            .records
            .get(principal.username())
            .map(|record| record.friends.clone())
            .unwrap_or_default())
    }
}
