//! # folio-import
//!
//! Imports markdown, HTML and plain-text files as draft documentation
//! articles.
//!
//! - `.md` is rendered to HTML with pulldown-cmark; the first `<h1>` is the
//!   title
//! - `.html` takes its title from the first `<h1>` and its body from
//!   `<main>`, else `<body>`
//! - anything else is stored verbatim under a title derived from the file
//!   name
//!
//! A file whose title maps to an existing article's slug is skipped as a
//! duplicate. Every file gets its own outcome in the [`ImportReport`]; one
//! bad file never stops the batch.

pub mod error;
mod importer;
pub mod source;

pub use error::ImportError;
pub use importer::{FileReport, ImportOutcome, ImportReport, Importer};
pub use source::{Extracted, SourceFormat, extract, file_name_to_title};
