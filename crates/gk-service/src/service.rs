// service.rs — GoalService: the operation surface over goal records.
//
// Every operation runs the same shape:
//
//   coarse capability gate → store access → fine ownership gate
//
// The coarse gate aborts with Forbidden before the store is touched. The
// fine gate never aborts anything: mutations have already committed by
// the time it runs, it only decides whether the caller gets the resulting
// view back or a "not found". That mutate-then-gate ordering is observable
// behavior (a non-owner's revision really does persist) and is preserved
// on purpose.
//
// Mutating operations run inside the store's `transact` boundary so the
// share fan-out commits all of its records or none.

use gk_directory::{FriendDirectory, JsonDirectory};
use gk_goal::{Goal, GoalStore, JsonGoalStore, StoreError};
use gk_policy::{capability, GoalPolicy, Principal};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::share::SharingCoordinator;

/// Placeholder rendered when an owner has no resolvable display name.
const OWNER_NAME_FALLBACK: &str = "none";

/// The six goal operations, composed from a store, a directory, and the
/// authorization policy. Generic over both collaborator seams.
pub struct GoalService<S, D> {
    store: S,
    directory: D,
    policy: GoalPolicy,
}

impl<S, D> GoalService<S, D>
where
    S: GoalStore,
    D: FriendDirectory,
{
    pub fn new(store: S, directory: D) -> Self {
        Self {
            store,
            directory,
            policy: GoalPolicy::new(),
        }
    }

    /// List every goal in the store, newest first.
    ///
    /// Requires "goal:read". No per-item ownership filter is applied.
    /// Holders of "user:read" get each goal's text amended with the
    /// owner's display name; the amended records are projections, the
    /// stored ones are never touched.
    pub fn list_goals(&self, principal: &Principal) -> Result<Vec<Goal>, ServiceError> {
        if !self.policy.can_list_goals(principal) {
            tracing::debug!(
                "denied list for '{}': missing {}",
                principal.username(),
                capability::GOAL_READ
            );
            return Err(ServiceError::Forbidden {
                capability: capability::GOAL_READ,
            });
        }

        let goals = self.store.find_all()?;
        if !self.policy.should_enrich_with_owner_names(principal) {
            return Ok(goals);
        }

        let mut view = Vec::with_capacity(goals.len());
        for goal in goals {
            let name = self
                .directory
                .display_name_of(&goal.owner)?
                .unwrap_or_else(|| OWNER_NAME_FALLBACK.to_string());
            view.push(Goal {
                text: format!("{}, by {}", goal.text, name),
                ..goal
            });
        }
        Ok(view)
    }

    /// Fetch one goal by id, as stored.
    ///
    /// Requires "goal:read"; any reader may fetch any goal. Unknown ids
    /// are `None`.
    pub fn read_goal(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Option<Goal>, ServiceError> {
        if !self.policy.can_read_goal(principal) {
            tracing::debug!(
                "denied read for '{}': missing {}",
                principal.username(),
                capability::GOAL_READ
            );
            return Err(ServiceError::Forbidden {
                capability: capability::GOAL_READ,
            });
        }
        Ok(self.store.find_by_id(id)?)
    }

    /// Create and persist a goal owned by `owner`.
    ///
    /// Requires "goal:write" on the acting principal. The owner is an
    /// explicit argument rather than the principal's own username so the
    /// sharing fan-out can create recipient-owned goals while the sharer
    /// acts.
    pub fn create_goal(
        &mut self,
        principal: &Principal,
        owner: &str,
        text: &str,
    ) -> Result<Goal, ServiceError> {
        if !self.policy.can_edit_goals(principal) {
            tracing::debug!(
                "denied create for '{}': missing {}",
                principal.username(),
                capability::GOAL_WRITE
            );
            return Err(ServiceError::Forbidden {
                capability: capability::GOAL_WRITE,
            });
        }

        let goal = self
            .store
            .transact(|store| -> Result<Goal, StoreError> { store.save(Goal::new(owner, text)) })?;
        Ok(goal)
    }

    /// Replace a goal's text.
    ///
    /// Requires "goal:write". The store write happens first; ownership
    /// then gates only the returned view, so a non-owner's revision
    /// persists yet comes back as `None`.
    pub fn revise_goal(
        &mut self,
        principal: &Principal,
        id: Uuid,
        text: &str,
    ) -> Result<Option<Goal>, ServiceError> {
        if !self.policy.can_edit_goals(principal) {
            tracing::debug!(
                "denied revise for '{}': missing {}",
                principal.username(),
                capability::GOAL_WRITE
            );
            return Err(ServiceError::Forbidden {
                capability: capability::GOAL_WRITE,
            });
        }

        let revised = self
            .store
            .transact(|store| -> Result<Option<Goal>, StoreError> {
                store.revise(id, text)?;
                store.find_by_id(id)
            })?;

        Ok(revised.filter(|goal| self.policy.can_write_goal(principal, goal)))
    }

    /// Mark a goal completed. Same gating shape as [`revise_goal`].
    ///
    /// [`revise_goal`]: GoalService::revise_goal
    pub fn complete_goal(
        &mut self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Option<Goal>, ServiceError> {
        if !self.policy.can_edit_goals(principal) {
            tracing::debug!(
                "denied complete for '{}': missing {}",
                principal.username(),
                capability::GOAL_WRITE
            );
            return Err(ServiceError::Forbidden {
                capability: capability::GOAL_WRITE,
            });
        }

        let completed = self
            .store
            .transact(|store| -> Result<Option<Goal>, StoreError> {
                store.complete(id)?;
                store.find_by_id(id)
            })?;

        Ok(completed.filter(|goal| self.policy.can_write_goal(principal, goal)))
    }

    /// Share a goal with every friend of the acting principal.
    ///
    /// Requires "goal:share" to enter. The fan-out itself runs only when
    /// the principal owns the goal; the returned view is then gated like a
    /// write, so a sharer without "goal:write" still fans out but observes
    /// `None`. All fan-out records commit or roll back together.
    pub fn share_goal(
        &mut self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Option<Goal>, ServiceError> {
        if !self.policy.can_share_goals(principal) {
            tracing::debug!(
                "denied share for '{}': missing {}",
                principal.username(),
                capability::GOAL_SHARE
            );
            return Err(ServiceError::Forbidden {
                capability: capability::GOAL_SHARE,
            });
        }

        let directory = &self.directory;
        let shared = self
            .store
            .transact(|store| -> Result<Option<Goal>, ServiceError> {
                let Some(goal) = store.find_by_id(id)? else {
                    return Ok(None);
                };
                SharingCoordinator::fan_out(store, directory, principal, &goal)?;
                Ok(Some(goal))
            })?;

        Ok(shared.filter(|goal| self.policy.can_share_goal(principal, goal)))
    }
}

impl GoalService<JsonGoalStore, JsonDirectory> {
    /// Open the file-backed service described by `config`.
    ///
    /// Creates the goals directory if needed; the users file must already
    /// exist.
    pub fn open(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let store = JsonGoalStore::new(&config.goals_dir)?;
        let directory = JsonDirectory::open(&config.users_file)?;
        tracing::debug!(
            "opened goal service: goals at {}, users from {}",
            config.goals_dir.display(),
            config.users_file.display()
        );
        Ok(Self::new(store, directory))
    }
}
