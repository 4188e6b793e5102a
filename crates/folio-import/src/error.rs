//! Error types for folio-import.
//!
//! Per-file problems never surface here; they are recorded in the
//! [`ImportReport`](crate::ImportReport). Only batch-level failures do.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no files to import")]
    NoFiles,

    #[error("cannot list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
