//! Heading extraction and anchor ID injection.
//!
//! Both passes walk the same parse and assign IDs the same way: IDs already
//! in the markup are reserved, then headings without one receive a slug of
//! their text, deduplicated in document order. Running the extractor on the
//! original markup or on the output of [`inject_heading_ids`] therefore
//! yields the same IDs.

use serde::Serialize;

use crate::dom::{self, Element};
use crate::html::{escape, text_content};
use crate::slug::SlugDeduper;

/// One heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Tag numeral, 1 through 6.
    pub level: u8,
    /// Outline depth: `level - 1`, with `h1` sharing depth 1 with `h2`.
    pub depth: u8,
    pub id: String,
    pub text: String,
}

impl Heading {
    #[must_use]
    pub const fn depth_for_level(level: u8) -> u8 {
        if level > 1 { level - 1 } else { 1 }
    }
}

struct Assigned {
    element: Element,
    level: u8,
    id: String,
    text: String,
    generated: bool,
}

/// Assign an ID to every heading in `source`.
fn assign_ids(source: &str) -> Vec<Assigned> {
    let elements = dom::elements(source);
    let mut slugs = SlugDeduper::new();
    for el in &elements {
        if let Some(id) = el.attr("id").filter(|id| !id.is_empty()) {
            slugs.reserve(id);
        }
    }

    elements
        .into_iter()
        .filter_map(|element| {
            let level = element.heading_level()?;
            let text = text_content(element.inner_html(source));
            let (id, generated) = match element.attr("id").filter(|id| !id.is_empty()) {
                Some(id) => (id.to_string(), false),
                None => (slugs.unique(&text), true),
            };
            Some(Assigned {
                element,
                level,
                id,
                text,
                generated,
            })
        })
        .collect()
}

/// Headings in `source` whose depth is at most `max_depth`, in document
/// order.
///
/// IDs are assigned over the whole document before the first item is
/// yielded, since deduplication depends on every heading. Depth filtering
/// and [`Heading`] construction happen as the iterator advances.
pub fn extract_headings(source: &str, max_depth: u8) -> impl Iterator<Item = Heading> + use<> {
    let assigned = assign_ids(source);
    tracing::trace!(candidates = assigned.len(), max_depth, "scanned headings");
    assigned.into_iter().filter_map(move |a| {
        let depth = Heading::depth_for_level(a.level);
        (depth <= max_depth).then(|| Heading {
            level: a.level,
            depth,
            text: a.text,
            id: a.id,
        })
    })
}

/// Add an `id` attribute to every heading that lacks one. Content that is
/// already fully anchored comes back unchanged.
#[must_use]
pub fn inject_heading_ids(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 64);
    let mut cursor = 0;

    for assigned in assign_ids(source).into_iter().filter(|a| a.generated) {
        let at = assigned.element.tag_name_end;
        if at < cursor || !source.is_char_boundary(at) {
            continue;
        }
        out.push_str(&source[cursor..at]);
        out.push_str(" id=\"");
        out.push_str(&escape(&assigned.id));
        out.push('"');
        cursor = at;
    }
    out.push_str(&source[cursor..]);
    out
}
