//! The `search_query_highlight` field: a short plain-text window of an
//! article around the first match of the search term, with matched words
//! wrapped in `<mark>`.
//!
//! Windows are measured in characters, never bytes, so multi-byte text is
//! never split inside a character.

use regex::Regex;

use folio_config::SearchConfig;
use folio_markup::html::strip_tags;

const MARK_OPEN: &str = "<mark class='search-query-highlight'>";
const MARK_CLOSE: &str = "</mark>";

/// Take `window_chars` characters from `offset`, trim whitespace and the punctuation
/// `'`, `.` and `,` from both ends, then append the teaser.
fn window(text: &str, offset: usize, cfg: &SearchConfig) -> String {
    let slice: String = text.chars().skip(offset).take(cfg.window_chars).collect();
    let trimmed = slice.trim().trim_matches(|c| matches!(c, '\'' | '.' | ','));
    format!("{trimmed}{}", cfg.teaser)
}

/// Leading window of the content's plain text.
#[must_use]
pub fn teaser(content: &str, cfg: &SearchConfig) -> String {
    window(strip_tags(content).trim(), 0, cfg)
}

/// Character offset of the first case-insensitive occurrence of `term`.
fn first_match(text: &str, term: &str) -> Option<usize> {
    let re = Regex::new(&format!("(?i){}", regex::escape(term))).ok()?;
    re.find(text).map(|m| text[..m.start()].chars().count())
}

/// Wrap every word containing `term` in a highlight marker.
fn mark(text: &str, term: &str) -> String {
    match Regex::new(&format!(r"(?i)\p{{L}}*?{}\p{{L}}*", regex::escape(term))) {
        Ok(re) => re
            .replace_all(text, format!("{MARK_OPEN}$0{MARK_CLOSE}").as_str())
            .into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, term, "highlight pattern rejected");
            text.to_string()
        }
    }
}

/// Window starting `lead_chars` before the first match of `term`, with
/// matches highlighted. Falls back to the leading window when `term` does
/// not occur.
#[must_use]
pub fn highlight_excerpt(content: &str, term: &str, cfg: &SearchConfig) -> String {
    let term = strip_tags(term);
    let term = term.trim();
    if term.is_empty() {
        return teaser(content, cfg);
    }
    let text = strip_tags(content);
    let text = text.trim();
    let offset = first_match(text, term).map_or(0, |idx| idx.saturating_sub(cfg.lead_chars));
    mark(&window(text, offset, cfg), term)
}

/// The field value for an article: highlighted when a term is given, a plain
/// teaser otherwise.
#[must_use]
pub fn search_query_highlight(content: &str, term: Option<&str>, cfg: &SearchConfig) -> String {
    match term {
        Some(term) => highlight_excerpt(content, term, cfg),
        None => teaser(content, cfg),
    }
}
