//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ImportError`) are defined in
//! their respective crates. A unified error is deferred to `folio-cli` where
//! all crate errors converge through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation at the write boundary.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
