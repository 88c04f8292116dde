// json.rs — JsonGoalStore: file-backed persistence for goal records.
//
// Each goal is stored as a JSON file: `<store_dir>/<goal_id>.json`.
// This keeps records isolated and makes the store easy to inspect
// manually. No database needed for the volumes this serves.
//
// Transactions snapshot the raw file contents up front and restore them
// on rollback, so a multi-record write (the sharing fan-out) commits all
// files or none.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::goal::Goal;
use crate::store::GoalStore;

/// File-backed GoalStore keeping one JSON file per goal.
pub struct JsonGoalStore {
    store_dir: PathBuf,
}

impl JsonGoalStore {
    /// Create a store backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store_dir = store_dir.as_ref().to_path_buf();
        fs::create_dir_all(&store_dir).map_err(|source| StoreError::Io {
            path: store_dir.display().to_string(),
            source,
        })?;
        Ok(Self { store_dir })
    }

    /// Path to the JSON file for a given goal.
    fn goal_file(&self, id: Uuid) -> PathBuf {
        self.store_dir.join(format!("{}.json", id))
    }

    /// All `.json` files currently in the store directory.
    fn json_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = fs::read_dir(&self.store_dir).map_err(|source| StoreError::Io {
            path: self.store_dir.display().to_string(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.store_dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn write_goal(&self, goal: &Goal) -> Result<(), StoreError> {
        let path = self.goal_file(goal.id);
        let json = serde_json::to_string_pretty(goal)?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Raw contents of every record file, for transaction rollback.
    fn snapshot(&self) -> Result<Vec<(PathBuf, String)>, StoreError> {
        let mut snapshot = Vec::new();
        for path in self.json_files()? {
            let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
            snapshot.push((path, contents));
        }
        Ok(snapshot)
    }

    /// Put the store directory back to a snapshot taken by `snapshot()`.
    /// Removes files created since, rewrites the rest.
    fn restore(&self, snapshot: &[(PathBuf, String)]) -> Result<(), StoreError> {
        for path in self.json_files()? {
            fs::remove_file(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        for (path, contents) in snapshot {
            fs::write(path, contents).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

impl GoalStore for JsonGoalStore {
    fn find_all(&self) -> Result<Vec<Goal>, StoreError> {
        let mut goals = Vec::new();
        for path in self.json_files()? {
            let json = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
            match serde_json::from_str::<Goal>(&json) {
                Ok(goal) => goals.push(goal),
                Err(err) => {
                    tracing::warn!("skipping unreadable goal file {}: {}", path.display(), err);
                }
            }
        }

        // Newest first; id as tiebreak so same-instant goals order stably.
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(goals)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Goal>, StoreError> {
        let path = self.goal_file(id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let goal: Goal = serde_json::from_str(&json)?;
        Ok(Some(goal))
    }

    fn save(&mut self, goal: Goal) -> Result<Goal, StoreError> {
        self.write_goal(&goal)?;
        Ok(goal)
    }

    fn revise(&mut self, id: Uuid, text: &str) -> Result<(), StoreError> {
        let Some(mut goal) = self.find_by_id(id)? else {
            return Ok(());
        };
        goal.text = text.to_string();
        goal.updated_at = Utc::now();
        self.write_goal(&goal)
    }

    fn complete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let Some(mut goal) = self.find_by_id(id)? else {
            return Ok(());
        };
        goal.completed = true;
        goal.updated_at = Utc::now();
        self.write_goal(&goal)
    }

    fn transact<T, E>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let snapshot = self.snapshot()?;
        match op(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                if let Err(restore_err) = self.restore(&snapshot) {
                    // The store is now in a partial state; surface the
                    // original failure, the rollback failure goes to the log.
                    tracing::error!(
                        "failed to roll back goal store at {}: {}",
                        self.store_dir.display(),
                        restore_err
                    );
                }
                Err(err)
            }
        }
    }
}
