//! Table-of-contents outline.
//!
//! Nesting follows depth deltas between consecutive headings: a deeper
//! heading opens exactly one new level under the previous item no matter how
//! many levels it skips, and a heading at the same or a shallower depth
//! closes every open level deeper than itself before it is appended.

use std::fmt::Write;

use serde::Serialize;

use crate::headings::{Heading, extract_headings};
use crate::html::escape;

/// One outline entry and the entries nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    pub heading: Heading,
    pub children: Vec<Self>,
}

struct Level {
    depth: u8,
    items: Vec<TocNode>,
}

/// Close the innermost open level, nesting its items under the last item of
/// the level below.
fn close_level(stack: &mut Vec<Level>) {
    if stack.len() < 2 {
        return;
    }
    let Some(closed) = stack.pop() else { return };
    if let Some(parent) = stack.last_mut().and_then(|l| l.items.last_mut()) {
        parent.children = closed.items;
    }
}

/// Build the nested outline for headings in document order.
#[must_use]
pub fn build_outline<I>(headings: I) -> Vec<TocNode>
where
    I: IntoIterator<Item = Heading>,
{
    let mut stack: Vec<Level> = Vec::new();

    for heading in headings {
        let depth = heading.depth;
        let node = TocNode {
            heading,
            children: Vec::new(),
        };

        match stack.last() {
            None => stack.push(Level {
                depth,
                items: Vec::new(),
            }),
            Some(top) if depth > top.depth => stack.push(Level {
                depth,
                items: Vec::new(),
            }),
            Some(_) => {
                while stack.len() > 1 && stack.last().is_some_and(|l| l.depth > depth) {
                    close_level(&mut stack);
                }
                // Landed between two open depths: keep nesting under the
                // item that was just closed.
                if stack.last().is_some_and(|l| l.depth < depth) {
                    let siblings = stack
                        .last_mut()
                        .and_then(|l| l.items.last_mut())
                        .map(|parent| std::mem::take(&mut parent.children))
                        .unwrap_or_default();
                    stack.push(Level {
                        depth,
                        items: siblings,
                    });
                }
            }
        }

        if let Some(level) = stack.last_mut() {
            level.items.push(node);
        }
    }

    while stack.len() > 1 {
        close_level(&mut stack);
    }
    stack.pop().map(|l| l.items).unwrap_or_default()
}

fn render_level(out: &mut String, items: &[TocNode]) {
    let Some(first) = items.first() else { return };
    let _ = write!(
        out,
        "<ol class='toc-level toc-level-depth-{}'>",
        first.heading.depth
    );
    for item in items {
        let h = &item.heading;
        let _ = write!(
            out,
            "<li class='toc-item toc-item-depth-{}'><a class='toc-link' href='#{}'>{}</a>",
            h.depth,
            escape(&h.id),
            escape(&h.text)
        );
        render_level(out, &item.children);
        out.push_str("</li>");
    }
    out.push_str("</ol>");
}

/// Render an outline as a `<nav class="toc">` block. An empty outline renders
/// as an empty string so callers can omit the container.
#[must_use]
pub fn render_toc(outline: &[TocNode]) -> String {
    if outline.is_empty() {
        return String::new();
    }
    let mut out = String::from("<nav class=\"toc\">");
    render_level(&mut out, outline);
    out.push_str("</nav>");
    out
}

/// Extract, nest and render the table of contents of `content`.
#[must_use]
pub fn table_of_contents(content: &str, max_depth: u8) -> String {
    render_toc(&build_outline(extract_headings(content, max_depth)))
}
