//! Error types for nearby-place search.

use thiserror::Error;

/// Error type for place search operations.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// The search backend could not be reached.
    #[error("Search service unavailable")]
    Unavailable,

    /// The keyword was rejected by the backend.
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// The backend reported a failure.
    #[error("Search backend error: {0}")]
    Backend(String),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
