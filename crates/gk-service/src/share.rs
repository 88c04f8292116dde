// share.rs — SharingCoordinator: the share fan-out.
//
// Sharing a goal creates one new goal per friend, each owned by that
// friend, each carrying the shared goal's text. The coordinator runs
// inside the share operation's transaction, so either every friend-goal
// commits or none do.
//
// Two properties worth keeping in view:
// - Only the true owner fans out. A non-owner reaching this point (the
//   coarse share gate checks a capability, not ownership) creates
//   nothing, and that holds on every repeat call.
// - The friend set is read once, up front. A directory change mid-share
//   cannot produce a half-old, half-new recipient list.

use gk_directory::FriendDirectory;
use gk_goal::{Goal, GoalStore};
use gk_policy::Principal;

use crate::error::ServiceError;

/// Orchestrates the multi-record creation behind the share operation.
pub struct SharingCoordinator;

impl SharingCoordinator {
    /// Create one copy of `goal` per friend of `sharer`, each owned by
    /// the friend. Returns the created goals, or an empty Vec when the
    /// sharer does not own the goal (or simply has no friends).
    ///
    /// The caller provides the transactional boundary; everything written
    /// here rolls back with it.
    pub fn fan_out<S, D>(
        store: &mut S,
        directory: &D,
        sharer: &Principal,
        goal: &Goal,
    ) -> Result<Vec<Goal>, ServiceError>
    where
        S: GoalStore,
        D: FriendDirectory,
    {
        if sharer.username() != goal.owner {
            tracing::debug!(
                "share of goal {} skipped: '{}' is not the owner",
                goal.id,
                sharer.username()
            );
            return Ok(Vec::new());
        }

        // Stable snapshot of the recipient set for the whole fan-out.
        let friends = directory.friends_of(sharer)?;

        let mut created = Vec::with_capacity(friends.len());
        for friend in friends {
            created.push(store.save(Goal::new(friend, goal.text.clone()))?);
        }
        tracing::debug!(
            "shared goal {} from '{}' with {} friend(s)",
            goal.id,
            sharer.username(),
            created.len()
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gk_directory::{MemoryDirectory, UserRecord};
    use gk_goal::MemoryGoalStore;

    fn two_friend_directory() -> MemoryDirectory {
        MemoryDirectory::new()
            .with_record(UserRecord::new("amy").with_friend("bob").with_friend("carol"))
    }

    #[test]
    fn owner_fan_out_creates_one_goal_per_friend() {
        let mut store = MemoryGoalStore::new();
        let directory = two_friend_directory();
        let amy = Principal::new("amy");
        let goal = store.save(Goal::new("amy", "Run 5k")).unwrap();

        let created = SharingCoordinator::fan_out(&mut store, &directory, &amy, &goal).unwrap();

        assert_eq!(created.len(), 2);
        let mut owners: Vec<&str> = created.iter().map(|g| g.owner.as_str()).collect();
        owners.sort_unstable();
        assert_eq!(owners, ["bob", "carol"]);
        for copy in &created {
            assert_eq!(copy.text, "Run 5k");
            assert!(!copy.completed);
            assert_ne!(copy.id, goal.id);
        }
        // Originals plus the two copies are persisted.
        assert_eq!(store.find_all().unwrap().len(), 3);
    }

    #[test]
    fn non_owner_fan_out_creates_nothing() {
        let mut store = MemoryGoalStore::new();
        let directory = two_friend_directory();
        let bob = Principal::new("bob");
        let goal = store.save(Goal::new("amy", "Run 5k")).unwrap();

        // Twice, to show there is no state that makes a retry behave differently.
        for _ in 0..2 {
            let created =
                SharingCoordinator::fan_out(&mut store, &directory, &bob, &goal).unwrap();
            assert!(created.is_empty());
        }
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn friendless_owner_fan_out_creates_nothing() {
        let mut store = MemoryGoalStore::new();
        let directory = MemoryDirectory::new().with_record(UserRecord::new("amy"));
        let amy = Principal::new("amy");
        let goal = store.save(Goal::new("amy", "Run 5k")).unwrap();

        let created = SharingCoordinator::fan_out(&mut store, &directory, &amy, &goal).unwrap();

        assert!(created.is_empty());
        assert_eq!(store.find_all().unwrap().len(), 1);
    }
}
