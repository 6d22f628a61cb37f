//! Search error types for anisong-search.

use anisong_db::error::DatabaseError;

/// Errors from search operations.
///
/// Not-found conditions are never errors: an unknown anime or artist simply
/// produces an empty result list.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Request rejected before any catalog work started.
    #[error("validation error: {0}")]
    Validation(String),

    /// Error from the libSQL catalog.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}
