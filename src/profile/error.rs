//! Error types for profile lookups.

use thiserror::Error;

/// Error type for profile store operations.
#[derive(Error, Debug, Clone)]
pub enum ProfileError {
    /// The backend could not be reached.
    #[error("Profile store unavailable")]
    Unavailable,

    /// The backend refused the read.
    #[error("Permission denied reading profile field")]
    PermissionDenied,

    /// The backend reported a failure.
    #[error("Profile backend error: {0}")]
    Backend(String),
}

/// Result type alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
