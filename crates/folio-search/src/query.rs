//! Search term to FTS5 MATCH expression.
//!
//! Every whitespace-separated word becomes a quoted prefix query (`"word"*`)
//! and words are implicitly ANDed, so typing "rot tok" finds "Rotate your
//! tokens". Quoting keeps FTS5 operators in user input inert.

use crate::error::SearchError;

/// Build the MATCH expression for `term`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidQuery`] when `term` has no word characters.
pub fn fts_query(term: &str) -> Result<String, SearchError> {
    let words: Vec<String> = term
        .split_whitespace()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect::<String>())
        .filter(|w| !w.is_empty())
        .map(|w| format!("\"{w}\"*"))
        .collect();
    if words.is_empty() {
        return Err(SearchError::InvalidQuery(format!(
            "'{term}' has nothing to search for"
        )));
    }
    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("token", r#""token"*"#)]
    #[case("  rot   tok ", r#""rot"* "tok"*"#)]
    #[case(r#"a"b OR c*"#, r#""ab"* "OR"* "c"*"#)]
    #[case("naïve", r#""naïve"*"#)]
    fn words_become_prefix_queries(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(fts_query(term).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("*** ---")]
    fn empty_terms_are_rejected(#[case] term: &str) {
        assert!(matches!(fts_query(term), Err(SearchError::InvalidQuery(_))));
    }
}
