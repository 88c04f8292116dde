// error.rs — Error taxonomy for goal operations.
//
// Deliberately small. "Not found" is NOT here: an absent id and a failed
// ownership check both surface as Ok(None) so callers cannot tell them
// apart. Errors are reserved for denied coarse gates and collaborator
// failures.

use gk_directory::DirectoryError;
use gk_goal::StoreError;
use thiserror::Error;

/// Errors returned by [`GoalService`](crate::GoalService) operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The coarse capability gate failed. The store was never consulted.
    #[error("missing capability '{capability}'")]
    Forbidden { capability: &'static str },

    /// The goal store failed. Propagated as-is, never retried here.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// The user directory failed. Propagated as-is, never retried here.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}
