//! Slugification.
//!
//! Lowercase, keep letters and digits, turn whitespace, `-` and `_` runs into
//! a single `-`, drop everything else. The function is pure; the same text
//! always yields the same slug.

use std::collections::HashSet;

/// Fallback when text contains nothing sluggable.
pub const EMPTY_SLUG: &str = "section";

#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }

    if out.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        out
    }
}

/// Hands out unique slugs within one document.
///
/// IDs already present in the markup are reserved first. A generated slug
/// that collides gets `-2`, `-3`, ... in document order.
#[derive(Debug, Default)]
pub struct SlugDeduper {
    taken: HashSet<String>,
}

impl SlugDeduper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an existing ID as used.
    pub fn reserve(&mut self, id: &str) {
        self.taken.insert(id.to_string());
    }

    /// Slugify `text` and make the result unique.
    pub fn unique(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.taken.insert(base.clone()) {
            return base;
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{base}-{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Getting Started", "getting-started")]
    #[case("  API -- Reference ", "api-reference")]
    #[case("What's new in v2.0?", "whats-new-in-v20")]
    #[case("snake_case_name", "snake-case-name")]
    #[case("Überblick", "überblick")]
    #[case("!!!", EMPTY_SLUG)]
    fn slug_rule(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn slug_is_deterministic() {
        assert_eq!(slugify("Same Text"), slugify("Same Text"));
    }

    #[test]
    fn deduper_suffixes_in_order() {
        let mut d = SlugDeduper::new();
        d.reserve("setup");
        assert_eq!(d.unique("Setup"), "setup-2");
        assert_eq!(d.unique("Setup"), "setup-3");
        assert_eq!(d.unique("Usage"), "usage");
    }

    #[test]
    fn deduper_skips_suffixes_already_taken() {
        let mut d = SlugDeduper::new();
        d.reserve("faq-2");
        assert_eq!(d.unique("FAQ"), "faq");
        assert_eq!(d.unique("FAQ"), "faq-3");
    }
}
