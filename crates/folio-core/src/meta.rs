//! Typed metadata records.
//!
//! Each entity has a fixed set of metadata fields. A write carries only the
//! fields being changed (`None` leaves a field untouched; `Some(None)` clears
//! an optional reference). Before a write reaches storage it is filtered
//! against the acting [`Actor`]: fields the actor may not touch are dropped
//! and reported, never raised as errors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::StateSet;
use crate::enums::Role;

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// Whoever is performing a metadata write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Actor {
    pub role: Role,
    pub name: Option<String>,
}

impl Actor {
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self { role, name: None }
    }

    /// Local operator (CLI, importer). Holds every capability.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(Role::Administrator)
    }

    #[must_use]
    pub fn may_write(&self, field: MetaField) -> bool {
        self.role >= field.required_role()
    }
}

// ---------------------------------------------------------------------------
// MetaField
// ---------------------------------------------------------------------------

/// Every writable metadata field, across all entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetaField {
    ArticleMenu,
    ArticleStates,
    TopicMenu,
    TopicParentPage,
    MenuParentPage,
}

impl MetaField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArticleMenu => "article_menu",
            Self::ArticleStates => "article_states",
            Self::TopicMenu => "topic_menu",
            Self::TopicParentPage => "topic_parent_page",
            Self::MenuParentPage => "menu_parent_page",
        }
    }

    #[must_use]
    pub const fn required_role(self) -> Role {
        match self {
            Self::ArticleMenu | Self::ArticleStates => Role::Author,
            Self::TopicMenu | Self::TopicParentPage | Self::MenuParentPage => Role::Editor,
        }
    }
}

impl fmt::Display for MetaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Metadata write for an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArticleMeta {
    pub menu: Option<Option<String>>,
    pub states: Option<StateSet>,
}

/// Metadata write for a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TopicMeta {
    pub menu: Option<Option<String>>,
    pub parent_page: Option<Option<String>>,
}

/// Metadata write for a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuMeta {
    pub parent_page: Option<Option<String>>,
}

/// Which fields of a write were stored and which were skipped for lack of
/// permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetaWriteOutcome {
    pub applied: Vec<MetaField>,
    pub skipped: Vec<MetaField>,
}

impl MetaWriteOutcome {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Drop `slot` if the actor may not write `field`, recording the decision.
fn gate<T>(slot: &mut Option<T>, field: MetaField, actor: &Actor, outcome: &mut MetaWriteOutcome) {
    if slot.is_none() {
        return;
    }
    if actor.may_write(field) {
        outcome.applied.push(field);
    } else {
        *slot = None;
        outcome.skipped.push(field);
    }
}

impl ArticleMeta {
    /// Remove fields the actor may not write.
    #[must_use]
    pub fn permitted(mut self, actor: &Actor) -> (Self, MetaWriteOutcome) {
        let mut outcome = MetaWriteOutcome::default();
        gate(&mut self.menu, MetaField::ArticleMenu, actor, &mut outcome);
        gate(&mut self.states, MetaField::ArticleStates, actor, &mut outcome);
        (self, outcome)
    }
}

impl TopicMeta {
    #[must_use]
    pub fn permitted(mut self, actor: &Actor) -> (Self, MetaWriteOutcome) {
        let mut outcome = MetaWriteOutcome::default();
        gate(&mut self.menu, MetaField::TopicMenu, actor, &mut outcome);
        gate(&mut self.parent_page, MetaField::TopicParentPage, actor, &mut outcome);
        (self, outcome)
    }
}

impl MenuMeta {
    #[must_use]
    pub fn permitted(mut self, actor: &Actor) -> (Self, MetaWriteOutcome) {
        let mut outcome = MetaWriteOutcome::default();
        gate(&mut self.parent_page, MetaField::MenuParentPage, actor, &mut outcome);
        (self, outcome)
    }
}

/// Normalize a submitted page reference. Blank input and non-positive
/// numbers (the "no page" sentinels of the settings form) mean none.
#[must_use]
pub fn parse_page_ref(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(n) if n <= 0 => None,
        _ => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn author_cannot_touch_topic_meta() {
        let meta = TopicMeta {
            menu: Some(Some("mnu-00000001".into())),
            parent_page: Some(None),
        };
        let (kept, outcome) = meta.permitted(&Actor::new(Role::Author));
        assert_eq!(kept, TopicMeta::default());
        assert!(outcome.is_noop());
        assert_eq!(
            outcome.skipped,
            vec![MetaField::TopicMenu, MetaField::TopicParentPage]
        );
    }

    #[test]
    fn author_can_write_article_meta() {
        let meta = ArticleMeta {
            menu: Some(None),
            states: None,
        };
        let (kept, outcome) = meta.clone().permitted(&Actor::new(Role::Author));
        assert_eq!(kept, meta);
        assert_eq!(outcome.applied, vec![MetaField::ArticleMenu]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn anonymous_is_skipped_everywhere() {
        let (_, outcome) = ArticleMeta {
            menu: Some(None),
            states: Some(StateSet::new()),
        }
        .permitted(&Actor::new(Role::Anonymous));
        assert_eq!(
            outcome.skipped,
            vec![MetaField::ArticleMenu, MetaField::ArticleStates]
        );
    }

    #[rstest]
    #[case("", None)]
    #[case("0", None)]
    #[case("-1", None)]
    #[case(" art-0a0b0c0d ", Some("art-0a0b0c0d"))]
    #[case("42", Some("42"))]
    fn page_ref_sentinels(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_page_ref(raw).as_deref(), expected);
    }
}
