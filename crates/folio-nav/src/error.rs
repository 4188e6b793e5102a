//! Error types for folio-nav.
//!
//! A missing menu, article or topic is never an error here; those come back
//! as `None`. Only failures of the underlying store surface.

/// Errors from navigation lookups.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("database error: {0}")]
    Database(#[from] folio_db::error::DatabaseError),
}
