//! # folio-markup
//!
//! Markup processing for Folio articles.
//!
//! - [`slug`]: the slugification rule shared by article slugs and heading IDs
//! - [`headings`]: the heading extractor and the anchor ID injection pass
//! - [`toc`]: nested outline construction and rendering
//! - [`html`]: escaping, tag stripping, and region extraction (`<main>`,
//!   `<body>`, first `<h1>`)
//!
//! Parsing uses ast-grep's tree-sitter HTML grammar, which recovers from
//! malformed markup instead of failing. None of the functions here return
//! errors: bad input yields a best-effort result.

mod dom;
pub mod headings;
pub mod html;
pub mod slug;
pub mod toc;

pub use headings::{Heading, extract_headings, inject_heading_ids};
pub use slug::{SlugDeduper, slugify};
pub use toc::{TocNode, build_outline, render_toc, table_of_contents};
