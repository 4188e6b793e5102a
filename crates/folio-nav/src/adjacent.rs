//! Previous/next traversal over a menu's items.

use std::fmt;

use serde::{Deserialize, Serialize};

use folio_core::entities::MenuItem;

/// Direction of an adjacent-item lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Prev => Self::Next,
            Self::Next => Self::Prev,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nearest item in `direction` from the first item linking to
/// `article_id`, skipping items without a destination.
///
/// Returns `None` when the article is not in the list or the boundary is
/// reached before a destination.
#[must_use]
pub fn adjacent_item<'m>(
    items: &'m [MenuItem],
    article_id: &str,
    direction: Direction,
) -> Option<&'m MenuItem> {
    let mut idx = items
        .iter()
        .position(|item| item.target.article_id() == Some(article_id))?;
    loop {
        idx = match direction {
            Direction::Prev => idx.checked_sub(1)?,
            Direction::Next => idx + 1,
        };
        let item = items.get(idx)?;
        if item.target.is_destination() {
            return Some(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::entities::MenuTarget;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn item(id: &str, target: MenuTarget) -> MenuItem {
        MenuItem {
            id: id.into(),
            menu_id: "mnu-1".into(),
            parent_item_id: None,
            position: 0,
            title: id.into(),
            target,
            attr_title: None,
            link_target: None,
            rel: None,
            css_class: None,
        }
    }

    fn article(id: &str, article_id: &str) -> MenuItem {
        item(
            id,
            MenuTarget::Article {
                article_id: article_id.into(),
            },
        )
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            item("header", MenuTarget::Placeholder),
            article("i-a", "art-a"),
            item("hash", MenuTarget::Url { url: "#".into() }),
            item("blank", MenuTarget::Url { url: String::new() }),
            article("i-b", "art-b"),
            item("ext", MenuTarget::Url { url: "https://example.com".into() }),
        ]
    }

    #[rstest]
    #[case("art-a", Direction::Next, Some("i-b"))]
    #[case("art-b", Direction::Prev, Some("i-a"))]
    #[case("art-b", Direction::Next, Some("ext"))]
    #[case("art-a", Direction::Prev, None)]
    #[case("art-missing", Direction::Next, None)]
    fn skips_placeholders(
        #[case] article_id: &str,
        #[case] direction: Direction,
        #[case] expected: Option<&str>,
    ) {
        let items = menu();
        let found = adjacent_item(&items, article_id, direction).map(|i| i.id.as_str());
        assert_eq!(found, expected);
    }

    #[test]
    fn last_item_has_no_next() {
        let items = vec![article("i-a", "art-a"), item("tail", MenuTarget::Placeholder)];
        assert_eq!(adjacent_item(&items, "art-a", Direction::Next), None);
    }

    #[test]
    fn first_match_is_the_anchor() {
        let items = vec![
            article("first", "art-a"),
            article("i-b", "art-b"),
            article("again", "art-a"),
        ];
        assert_eq!(
            adjacent_item(&items, "art-a", Direction::Next).map(|i| i.id.as_str()),
            Some("i-b")
        );
    }
}
