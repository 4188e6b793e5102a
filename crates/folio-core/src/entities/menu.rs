use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ordered navigation list. Items are stored separately and loaded with
/// the menu when resolving navigation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Menu {
    pub id: String,
    pub name: String,
    /// Article shown as the sidebar's parent link.
    pub parent_page_id: Option<String>,
    pub items: Vec<MenuItem>,
    pub created_at: DateTime<Utc>,
}

impl Menu {
    /// Position of the first item pointing at `article_id`.
    #[must_use]
    pub fn position_of_article(&self, article_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.target.article_id() == Some(article_id))
    }
}

/// Destination of a menu item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuTarget {
    /// Links to a stored article; the URL is derived from its slug.
    Article { article_id: String },
    /// Arbitrary URL.
    Url { url: String },
    /// Inert entry with no destination, e.g. a folder header.
    Placeholder,
}

impl MenuTarget {
    #[must_use]
    pub fn article_id(&self) -> Option<&str> {
        match self {
            Self::Article { article_id } => Some(article_id),
            Self::Url { .. } | Self::Placeholder => None,
        }
    }

    /// Whether the item leads anywhere. A blank URL or a bare `#` does not.
    #[must_use]
    pub fn is_destination(&self) -> bool {
        match self {
            Self::Article { .. } => true,
            Self::Url { url } => {
                let url = url.trim();
                !url.is_empty() && url != "#"
            }
            Self::Placeholder => false,
        }
    }
}

/// One entry in a [`Menu`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub menu_id: String,
    /// Parent entry for nested sidebar rendering.
    pub parent_item_id: Option<String>,
    pub position: u32,
    pub title: String,
    pub target: MenuTarget,
    /// Value of the link's `title` attribute.
    pub attr_title: Option<String>,
    /// Value of the link's `target` attribute, e.g. `_blank`.
    pub link_target: Option<String>,
    pub rel: Option<String>,
    pub css_class: Option<String>,
}

/// A named slot that a menu can be designated for site-wide.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuLocation {
    pub location: String,
    pub menu_id: String,
}

impl MenuLocation {
    /// The location consulted when neither the article nor its topics carry
    /// a menu.
    pub const DEFAULT: &'static str = "documentation_sidebar";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MenuTarget::Article { article_id: "art-1".into() }, true)]
    #[case(MenuTarget::Url { url: "https://example.com".into() }, true)]
    #[case(MenuTarget::Url { url: "#".into() }, false)]
    #[case(MenuTarget::Url { url: "  ".into() }, false)]
    #[case(MenuTarget::Placeholder, false)]
    fn destination_detection(#[case] target: MenuTarget, #[case] expected: bool) {
        assert_eq!(target.is_destination(), expected);
    }

    #[test]
    fn target_serializes_tagged() {
        let json = serde_json::to_value(MenuTarget::Url { url: "/x".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "url", "url": "/x"}));
    }
}
