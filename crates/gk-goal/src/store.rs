// store.rs — GoalStore trait and the in-memory reference implementation.
//
// The GoalStore trait is the abstraction API for persisting goals. The
// service layer is written against this trait, so deployments can swap
// the bundled backends (in-memory, JSON files) for SQLite or a remote
// service without touching the authorization logic.
//
// Mutations run inside `transact`: every write made by the closure commits
// iff the closure returns Ok, and is rolled back otherwise. Sharing fans a
// goal out to several recipients through one transaction, so a failure
// partway must not leave a partial fan-out behind.

use uuid::Uuid;

use crate::error::StoreError;
use crate::goal::Goal;

/// Trait for persisting and retrieving goals.
///
/// In Rust, a `trait` is like an interface — it defines methods that
/// implementations must provide. Lookups and mutations of unknown ids are
/// no-ops / `None`, never errors; only backend failures produce a
/// [`StoreError`].
pub trait GoalStore {
    /// List all goals, newest first.
    fn find_all(&self) -> Result<Vec<Goal>, StoreError>;

    /// Get a specific goal by id.
    fn find_by_id(&self, id: Uuid) -> Result<Option<Goal>, StoreError>;

    /// Persist a goal (creates or overwrites by id) and return it.
    fn save(&mut self, goal: Goal) -> Result<Goal, StoreError>;

    /// Replace the text of the goal with the given id. No-op on unknown id.
    fn revise(&mut self, id: Uuid, text: &str) -> Result<(), StoreError>;

    /// Mark the goal with the given id completed. No-op on unknown id.
    fn complete(&mut self, id: Uuid) -> Result<(), StoreError>;

    /// Run `op` as one transaction: commit its writes iff it returns Ok,
    /// roll all of them back otherwise.
    fn transact<T, E>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
        Self: Sized;
}

/// In-memory GoalStore backed by a plain Vec.
///
/// The reference implementation: tests and embedders that don't need
/// durability use this. Transactions checkpoint the whole record set and
/// restore it on rollback.
#[derive(Debug, Clone, Default)]
pub struct MemoryGoalStore {
    goals: Vec<Goal>,
}

impl MemoryGoalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GoalStore for MemoryGoalStore {
    fn find_all(&self) -> Result<Vec<Goal>, StoreError> {
        let mut goals = self.goals.clone();
        // Newest first; id as tiebreak so same-instant goals order stably.
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(goals)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Goal>, StoreError> {
        Ok(self.goals.iter().find(|g| g.id == id).cloned())
    }

    fn save(&mut self, goal: Goal) -> Result<Goal, StoreError> {
        match self.goals.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => *existing = goal.clone(),
            None => self.goals.push(goal.clone()),
        }
        Ok(goal)
    }

    fn revise(&mut self, id: Uuid, text: &str) -> Result<(), StoreError> {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) {
            goal.text = text.to_string();
            goal.updated_at = chrono::Utc::now();
        }
        Ok(())
    }

    fn complete(&mut self, id: Uuid) -> Result<(), StoreError> {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) {
            goal.completed = true;
            goal.updated_at = chrono::Utc::now();
        }
        Ok(())
    }

    fn transact<T, E>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let checkpoint = self.goals.clone();
        match op(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.goals = checkpoint;
                Err(err)
            }
        }
    }
}
