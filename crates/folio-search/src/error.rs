//! Search error types for folio-search.

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Error from the libSQL content store (FTS5 queries).
    #[error("database error: {0}")]
    Database(#[from] folio_db::error::DatabaseError),

    /// The search term has no searchable characters.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
