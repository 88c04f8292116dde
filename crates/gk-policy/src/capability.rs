// capability.rs — Capability tokens.
//
// Capabilities are opaque permission tokens a principal may hold, checked
// by membership only. The authentication layer that mints principals
// decides which tokens to stamp on them; nothing in this crate enumerates
// or validates the token universe.

/// Read goal records (listing and single reads).
pub const GOAL_READ: &str = "goal:read";

/// Create and mutate goal records.
pub const GOAL_WRITE: &str = "goal:write";

/// Enter the share operation.
pub const GOAL_SHARE: &str = "goal:share";

/// Resolve user display names during listing.
pub const USER_READ: &str = "user:read";
