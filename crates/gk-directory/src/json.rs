//! JSON file-backed directory

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use gk_policy::Principal;

use crate::directory::{FriendDirectory, UserRecord};
use crate::error::DirectoryError;
use crate::memory::MemoryDirectory;

/// Directory loaded once from a JSON file holding an array of
/// [`UserRecord`] values. Lookups after that are in-memory; edit the file
/// and reopen to pick up changes.
pub struct JsonDirectory {
    inner: MemoryDirectory,
}

impl JsonDirectory {
    /// Load the directory from the given file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<UserRecord> = serde_json::from_str(&json)?;

        let mut inner = MemoryDirectory::new();
        for record in records {
            inner.insert(record);
        }
        tracing::debug!(
            "loaded {} user records from {}",
            inner.len(),
            path.display()
        );
        Ok(Self { inner })
    }
}

impl FriendDirectory for JsonDirectory {
    fn display_name_of(&self, username: &str) -> Result<Option<String>, DirectoryError> {
        self.inner.display_name_of(username)
    }

    fn friends_of(&self, principal: &Principal) -> Result<BTreeSet<String>, DirectoryError> {
        self.inner.friends_of(principal)
    }
}
