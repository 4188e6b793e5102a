//! HTML escaping, tag stripping, and region extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom;

static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("static regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Decode the handful of entities that show up in heading text.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

/// Remove `<script>` and `<style>` blocks, keeping all other markup.
#[must_use]
pub fn remove_scripts(markup: &str) -> String {
    SCRIPT_STYLE.replace_all(markup, "").into_owned()
}

/// Remove `<script>`/`<style>` blocks and every remaining tag. Entities are
/// left as they are.
#[must_use]
pub fn strip_tags(markup: &str) -> String {
    let without_blocks = SCRIPT_STYLE.replace_all(markup, "");
    TAG.replace_all(&without_blocks, "").into_owned()
}

/// Plain text of a markup fragment: tags stripped, entities decoded,
/// whitespace collapsed.
#[must_use]
pub fn text_content(markup: &str) -> String {
    let text = decode_entities(&strip_tags(markup));
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Inner markup of the first `<tag>` element.
#[must_use]
pub fn first_region<'s>(source: &'s str, tag: &str) -> Option<&'s str> {
    dom::elements(source)
        .into_iter()
        .find(|el| el.tag == tag)
        .map(|el| el.inner_html(source))
}

/// Article body of an uploaded page: the `<main>` region, else `<body>`.
#[must_use]
pub fn main_or_body(source: &str) -> Option<String> {
    first_region(source, "main")
        .or_else(|| first_region(source, "body"))
        .map(|s| s.trim().to_string())
}

/// Text of the first `<h1>`, if it has any.
#[must_use]
pub fn first_h1(source: &str) -> Option<String> {
    first_region(source, "h1")
        .map(text_content)
        .filter(|t| !t.is_empty())
}
