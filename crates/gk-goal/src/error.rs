// error.rs — Error types for goal persistence.

use thiserror::Error;

/// Errors reported by [`GoalStore`](crate::GoalStore) implementations.
///
/// Missing records are not errors: lookups return `None` and mutations of
/// unknown ids are no-ops. This enum covers backend failures only.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize a goal record.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage backend rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}
