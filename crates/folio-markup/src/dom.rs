//! Flat element view over ast-grep's HTML tree.
//!
//! The tree-sitter HTML grammar never rejects input; unclosed or stray tags
//! become error nodes and parsing carries on. Each visited `element` is
//! copied into an owned [`Element`] so callers work with byte ranges into the
//! original source instead of borrowed nodes.

use std::ops::Range;

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};

/// An HTML attribute: `(name, optional_value)`.
pub type HtmlAttr = (String, Option<String>);

#[derive(Debug, Clone)]
pub struct Element {
    /// Lowercased tag name.
    pub tag: String,
    pub attrs: Vec<HtmlAttr>,
    /// Byte offset just past the tag name in the start tag.
    pub tag_name_end: usize,
    /// Bytes between the start tag and the end tag (or the element's end
    /// when the end tag is missing).
    pub inner: Range<usize>,
}

impl Element {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    /// The inner markup of this element within `source`.
    #[must_use]
    pub fn inner_html<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.inner.clone()).unwrap_or_default()
    }

    /// Heading numeral for `h1`..`h6`.
    #[must_use]
    pub fn heading_level(&self) -> Option<u8> {
        let bytes = self.tag.as_bytes();
        match bytes {
            [b'h', n @ b'1'..=b'6'] => Some(n - b'0'),
            _ => None,
        }
    }
}

/// Every element in `source`, in document order.
///
/// The tree is walked with an explicit pre-order iterator, so nesting depth
/// is bounded by the heap rather than the call stack.
pub fn elements(source: &str) -> Vec<Element> {
    let root = SupportLang::Html.ast_grep(source);
    let top = root.root();
    top.dfs()
        .filter(|node| node.kind().as_ref() == "element")
        .filter_map(|node| to_element(&node))
        .collect()
}

fn to_element<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Element> {
    let mut start = None;
    let mut end_tag_start = None;

    for child in node.children() {
        match child.kind().as_ref() {
            "start_tag" | "self_closing_tag" => start = Some(child),
            "end_tag" => end_tag_start = Some(child.range().start),
            _ => {}
        }
    }

    let start = start?;
    let tag_name = start
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?;
    let start_end = start.range().end;
    let inner_end = end_tag_start.unwrap_or_else(|| node.range().end);

    Some(Element {
        tag: tag_name.text().to_ascii_lowercase(),
        attrs: attrs_of(&start),
        tag_name_end: tag_name.range().end,
        inner: start_end..inner_end.max(start_end),
    })
}

fn attrs_of<D: ast_grep_core::Doc>(tag: &Node<D>) -> Vec<HtmlAttr> {
    tag.children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?;
            let value = attr.children().find_map(|c| match c.kind().as_ref() {
                "attribute_value" => Some(c.text().to_string()),
                "quoted_attribute_value" => Some(
                    c.children()
                        .find(|v| v.kind().as_ref() == "attribute_value")
                        .map(|v| v.text().to_string())
                        .unwrap_or_default(),
                ),
                _ => None,
            });
            Some((name.text().to_ascii_lowercase(), value))
        })
        .collect()
}
