//! Database error types for anisong-db.

use thiserror::Error;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in the catalog).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A catalog dump could not be read or decoded.
    #[error("Import failed: {0}")]
    Import(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
