//! Row-to-entity parsing helpers and bind-parameter builders.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entities and
//! binds variable-length id lists. These helpers keep that logic in one place.

use std::str::FromStr;

use anisong_core::errors::CoreError;

use crate::error::DatabaseError;

/// SQLite's historical bound-variable limit; id lists are chunked below it.
pub const MAX_BIND_PARAMS: usize = 500;

/// Parse a TEXT column into an enum implementing `FromStr`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_enum<T>(s: &str) -> Result<T, DatabaseError>
where
    T: FromStr<Err = CoreError>,
{
    s.parse().map_err(|e: CoreError| {
        DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}"))
    })
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER column stored as 0/1.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// `?1, ?2, ..., ?n` for an `IN (...)` clause.
#[must_use]
pub fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sorted, de-duplicated copy of an id list, so chunked queries keep id order.
#[must_use]
pub fn sorted_unique(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Bind an id chunk as positional parameters.
#[must_use]
pub fn id_params(ids: &[i64]) -> Vec<libsql::Value> {
    ids.iter().map(|&id| libsql::Value::Integer(id)).collect()
}
