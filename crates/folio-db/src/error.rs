//! Database error types for folio-db.

use thiserror::Error;

/// Errors from content store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A write was rejected at the boundary (unknown reference, cycle, ...).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A `before_save` hook refused the write.
    #[error(transparent)]
    Hook(#[from] folio_hooks::HookError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
