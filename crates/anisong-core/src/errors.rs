//! Cross-cutting error types for anisong.
//!
//! Domain-specific errors (`DatabaseError`, `SearchError`) are defined in
//! their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any anisong crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, range, unknown enum value).
    #[error("Validation error: {0}")]
    Validation(String),
}
