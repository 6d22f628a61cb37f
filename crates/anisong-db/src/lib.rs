//! # anisong-db
//!
//! libSQL storage for the anisong catalog.
//!
//! Holds every anime, song, artist and line-up membership the search engine
//! reads. The catalog is written once by [`import`] and is read-only afterwards;
//! searches reach it through the [`catalog::CatalogReader`] trait.

pub mod catalog;
pub mod error;
pub mod helpers;
pub mod import;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

pub use catalog::CatalogReader;

/// Central database handle for catalog operations.
pub struct CatalogDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CatalogDb {
    /// Open a local catalog at the given path. `":memory:"` opens a scratch catalog.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let catalog = Self { db, conn };
        catalog.run_migrations().await?;
        tracing::debug!(path, "catalog opened");
        Ok(catalog)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Number of songs in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn song_count(&self) -> Result<u64, DatabaseError> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM songs", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<u64>(0)?)
    }
}
