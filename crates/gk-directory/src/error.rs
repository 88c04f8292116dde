//! Error types for directory lookups

use thiserror::Error;

/// Errors reported by [`FriendDirectory`](crate::FriendDirectory) backends.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse directory data.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The directory backend rejected the lookup.
    #[error("directory backend error: {0}")]
    Backend(String),
}
