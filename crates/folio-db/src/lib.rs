//! # folio-db
//!
//! libSQL content store for Folio.
//!
//! Holds articles, topics (with their assignment order per article), menus
//! and menu items, site-wide menu locations, and the per-article feedback
//! counters. Metadata writes go through the typed records in
//! `folio_core::meta` and are filtered by the acting role before any SQL
//! runs.
//!
//! Uses the `libsql` crate (C `SQLite` fork) for native FTS5 over article
//! titles and bodies.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;
pub mod updates;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
pub struct FolioDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FolioDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
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

        let folio_db = Self { db, conn };
        folio_db.run_migrations().await?;
        Ok(folio_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"art-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Whether a row with `id` exists in `table`.
    pub(crate) async fn exists(&self, table: &str, id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}
