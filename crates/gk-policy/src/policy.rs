// policy.rs — The authorization decision set.
//
// Every goal operation consults GoalPolicy twice:
//
// 1. Coarse gate — capability membership only, evaluated BEFORE any store
//    access. Failing it means the operation never runs (Forbidden).
// 2. Fine gate — ownership against the actual fetched goal, evaluated
//    AFTER the store call. Failing it withholds the returned view as
//    "not found", so callers cannot tell "you don't own this" from
//    "this doesn't exist".
//
// Single reads are the exception: any holder of goal:read may fetch any
// goal by id, with no ownership refinement.
//
// All decisions are pure booleans. The policy never touches a store,
// never errors, and is safe to call concurrently.

use gk_goal::Goal;

use crate::capability;
use crate::principal::Principal;

/// Stateless authorization decisions over principals and goals.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalPolicy;

impl GoalPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Coarse gate for listing: requires "goal:read".
    pub fn can_list_goals(&self, principal: &Principal) -> bool {
        principal.has_capability(capability::GOAL_READ)
    }

    /// Coarse gate for single reads: requires "goal:read".
    ///
    /// No ownership check follows a read; a reader may fetch any goal.
    pub fn can_read_goal(&self, principal: &Principal) -> bool {
        principal.has_capability(capability::GOAL_READ)
    }

    /// Coarse gate for create/revise/complete: requires "goal:write".
    pub fn can_edit_goals(&self, principal: &Principal) -> bool {
        principal.has_capability(capability::GOAL_WRITE)
    }

    /// Coarse gate for the share operation: requires "goal:share".
    pub fn can_share_goals(&self, principal: &Principal) -> bool {
        principal.has_capability(capability::GOAL_SHARE)
    }

    /// Fine gate applied to a fetched goal after a mutation:
    /// requires "goal:write" AND ownership.
    pub fn can_write_goal(&self, principal: &Principal, goal: &Goal) -> bool {
        principal.has_capability(capability::GOAL_WRITE) && principal.username() == goal.owner
    }

    /// Fine gate applied to the goal view returned by share.
    ///
    /// Deliberately the same predicate as [`can_write_goal`]: the share
    /// token gates entry into the operation, but the returned view is
    /// still governed by the write capability plus ownership.
    ///
    /// [`can_write_goal`]: GoalPolicy::can_write_goal
    pub fn can_share_goal(&self, principal: &Principal, goal: &Goal) -> bool {
        self.can_write_goal(principal, goal)
    }

    /// Whether listing should append owner display names: requires
    /// "user:read". Orthogonal to ownership entirely.
    pub fn should_enrich_with_owner_names(&self, principal: &Principal) -> bool {
        principal.has_capability(capability::USER_READ)
    }
}
