//! # folio-search
//!
//! Search for Folio documentation.
//!
//! - [`highlight`]: the `search_query_highlight` excerpt (plain-text window
//!   around the first match, matches wrapped in `<mark>`)
//! - [`query`]: search term to FTS5 prefix query
//! - [`listing`]: published-article listing served to the search box
//!
//! Ranking comes from the FTS5 index in folio-db (porter stemming,
//! `bm25` rank order).

pub mod error;
pub mod highlight;
pub mod listing;
pub mod query;

pub use error::SearchError;
pub use highlight::{highlight_excerpt, search_query_highlight, teaser};
pub use listing::{ListingQuery, SearchHit, search_listing};
pub use query::fts_query;
