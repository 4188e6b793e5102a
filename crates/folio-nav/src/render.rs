//! HTML for sidebar menus, menu item links and article state notices.

use std::fmt::Write;

use serde::Serialize;

use folio_core::entities::{MenuItem, StateSet};
use folio_core::enums::ArticleState;
use folio_markup::html::escape;

/// A menu item together with what it needs to render: its resolved URL and,
/// for article items, the target article's state flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    pub item: MenuItem,
    pub href: Option<String>,
    pub states: StateSet,
}

impl MenuLink {
    /// Whether this link points at `article_id`.
    #[must_use]
    pub fn is_current(&self, article_id: Option<&str>) -> bool {
        article_id.is_some_and(|id| self.item.target.article_id() == Some(id))
    }
}

/// Inline icon for a state flag, as a labelled `<span>` wrapping an SVG.
#[must_use]
pub const fn state_icon(state: ArticleState) -> &'static str {
    match state {
        ArticleState::Archived => {
            r##"<span class="article_state_icon article_state_icon--archived" aria-label="Archived" title="Archived"><svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 0 24 24" width="24px" fill="#7E8E97"><path d="M0 0h24v24H0V0z" fill="none"/><path d="M20 2H4c-1 0-2 .9-2 2v3.01c0 .72.43 1.34 1 1.69V20c0 1.1 1.1 2 2 2h14c.9 0 2-.9 2-2V8.7c.57-.35 1-.97 1-1.69V4c0-1.1-1-2-2-2zm-5 12H9v-2h6v2zm5-7H4V4l16-.02V7z"/></svg></span>"##
        }
        ArticleState::Incomplete => {
            r##"<span class="article_state_icon article_state_icon--incomplete" aria-label="Incomplete" title="Incomplete"><svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 0 24 24" width="24px" fill="#F8841E"><path d="M0 0h24v24H0z" fill="none"/><path d="M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"/></svg></span>"##
        }
        ArticleState::Deprecated => {
            r##"<span class="article_state_icon article_state_icon--deprecated" aria-label="Deprecated" title="Deprecated"><svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 0 24 24" width="24px" fill="#F81E1E"><path d="M0 0h24v24H0z" fill="none"/><path d="M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z"/></svg></span>"##
        }
        ArticleState::Experimental => {
            r##"<span class="article_state_icon article_state_icon--experimental" aria-label="Experimental" title="Experimental"><svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 0 24 24" width="24px" fill="#85A700"><path d="M0 0h24v24H0z" fill="none"/><path d="M19.8,18.4L14,10.67V6.5l1.35-1.69C15.61,4.48,15.38,4,14.96,4H9.04C8.62,4,8.39,4.48,8.65,4.81L10,6.5v4.17L4.2,18.4 C3.71,19.06,4.18,20,5,20h14C19.82,20,20.29,19.06,19.8,18.4z"/></svg></span>"##
        }
        ArticleState::Premium => {
            r##"<span class="article_state_icon article_state_icon--premium" aria-label="Premium" title="Premium"><svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 0 24 24" width="24px" fill="var(--clr-active)"><path d="M0 0h24v24H0z" fill="none"/><path d="M12 17.27 18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg></span>"##
        }
    }
}

/// Status notices shown above an article, one per flag. Empty for a normal
/// article.
#[must_use]
pub fn state_messages(states: &StateSet) -> String {
    let mut out = String::new();
    for state in states.iter() {
        let _ = write!(
            out,
            r#"<div role="status" class="article_state_msg article_state_msg--{}">{}{}</div>"#,
            state.as_str(),
            state_icon(state),
            escape(state.message()),
        );
    }
    out
}

/// Render one menu item as an `<a>` element.
///
/// Attributes are emitted in a fixed order and only when non-empty. A
/// `_blank` target without an explicit `rel` gets `rel="noopener"`.
#[must_use]
pub fn item_link(link: &MenuLink, class: &str, current: bool, show_icons: bool) -> String {
    let item = &link.item;
    let target = item.link_target.as_deref().unwrap_or("");
    let rel = match item.rel.as_deref() {
        Some(rel) if !rel.is_empty() => rel,
        _ if target == "_blank" => "noopener",
        _ => "",
    };
    let attrs = [
        ("class", class),
        ("title", item.attr_title.as_deref().unwrap_or("")),
        ("target", target),
        ("rel", rel),
        ("href", link.href.as_deref().unwrap_or("")),
        ("aria-current", if current { "page" } else { "" }),
    ];

    let mut out = String::from("<a");
    for (name, value) in attrs {
        if !value.is_empty() {
            let _ = write!(out, r#" {name}="{}""#, escape(value));
        }
    }
    out.push('>');
    out.push_str(&escape(&item.title));
    if show_icons {
        for state in link.states.iter() {
            out.push_str(state_icon(state));
        }
    }
    out.push_str("</a>");
    out
}

/// Render a menu as nested `<ul>` lists following item parent links.
///
/// Items whose parent is missing from the menu render at the top level.
/// Returns an empty string for an empty menu.
#[must_use]
pub fn render_sidebar(links: &[MenuLink], current: Option<&str>, show_icons: bool) -> String {
    if links.is_empty() {
        return String::new();
    }
    let known = |id: &str| links.iter().any(|l| l.item.id == id);
    let roots: Vec<&MenuLink> = links
        .iter()
        .filter(|l| l.item.parent_item_id.as_deref().is_none_or(|p| !known(p)))
        .collect();

    let mut out = String::from(r#"<ul id="nav" class="menu">"#);
    render_level(&mut out, links, &roots, current, show_icons);
    out.push_str("</ul>");
    out
}

fn render_level(
    out: &mut String,
    all: &[MenuLink],
    level: &[&MenuLink],
    current: Option<&str>,
    show_icons: bool,
) {
    for link in level {
        let children: Vec<&MenuLink> = all
            .iter()
            .filter(|l| l.item.parent_item_id.as_deref() == Some(link.item.id.as_str()))
            .collect();
        let is_current = link.is_current(current);

        let mut classes = vec!["menu-item"];
        if let Some(css) = link.item.css_class.as_deref().filter(|c| !c.is_empty()) {
            classes.push(css);
        }
        if is_current {
            classes.push("current-menu-item");
        }
        if !children.is_empty() {
            classes.push("menu-item-has-children");
        }

        let _ = write!(out, r#"<li class="{}">"#, escape(&classes.join(" ")));
        out.push_str(&item_link(link, "", is_current, show_icons));
        if !children.is_empty() {
            out.push_str(r#"<ul class="sub-menu">"#);
            render_level(out, all, &children, current, show_icons);
            out.push_str("</ul>");
        }
        out.push_str("</li>");
    }
}

/// Link back to the sidebar's parent page.
#[must_use]
pub fn parent_link(title: &str, href: &str) -> String {
    format!(
        r#"<a href="{}" class="nav-parent"><svg xmlns="http://www.w3.org/2000/svg" height="48" width="48" viewBox="0 0 48 48"><path d="M28.05 36 16 23.95 28.05 11.9l2.15 2.15-9.9 9.9 9.9 9.9Z" /></svg>{}</a>"#,
        escape(href),
        escape(title),
    )
}
