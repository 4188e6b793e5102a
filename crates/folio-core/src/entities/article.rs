use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ArticleState, ArticleStatus, ContentType};

/// A documentation content unit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Body markup as stored (before content filters run).
    pub content: String,
    pub content_type: ContentType,
    pub status: ArticleStatus,
    pub states: StateSet,
    /// Sidebar menu assigned directly to this article.
    pub menu_id: Option<String>,
    /// Assigned topic IDs, in assignment order.
    pub topic_ids: Vec<String>,
    pub helpful: u64,
    pub unhelpful: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    #[must_use]
    pub fn is_documentation(&self) -> bool {
        self.content_type == ContentType::Documentation
    }
}

/// Input for creating an article. `before_save` hooks receive this and may
/// rewrite it or veto the save.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    pub content: String,
    pub content_type: ContentType,
    pub status: ArticleStatus,
    pub states: StateSet,
    pub menu_id: Option<String>,
    pub topic_ids: Vec<String>,
}

impl ArticleDraft {
    /// A draft-status documentation article with the given title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            content: content.into(),
            content_type: ContentType::Documentation,
            status: ArticleStatus::Draft,
            states: StateSet::new(),
            menu_id: None,
            topic_ids: Vec::new(),
        }
    }
}

/// The set of state flags on an article. Empty means "normal".
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct StateSet(BTreeSet<ArticleState>);

impl StateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from submitted flag names.
    ///
    /// `"normal"` is accepted and contributes nothing, so a form that always
    /// posts it alongside the checked boxes round-trips. Unknown names are
    /// returned as the error.
    pub fn from_names<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || name == "normal" {
                continue;
            }
            match ArticleState::parse(name) {
                Some(state) => {
                    set.insert(state);
                }
                None => return Err(name.to_string()),
            }
        }
        Ok(Self(set))
    }

    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, state: ArticleState) -> bool {
        self.0.contains(&state)
    }

    pub fn insert(&mut self, state: ArticleState) -> bool {
        self.0.insert(state)
    }

    pub fn remove(&mut self, state: ArticleState) -> bool {
        self.0.remove(&state)
    }

    pub fn iter(&self) -> impl Iterator<Item = ArticleState> + '_ {
        self.0.iter().copied()
    }

    /// Flag names as stored, or `["normal"]` for the empty set.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        if self.is_normal() {
            return vec!["normal"];
        }
        self.iter().map(ArticleState::as_str).collect()
    }
}

impl FromIterator<ArticleState> for StateSet {
    fn from_iter<T: IntoIterator<Item = ArticleState>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
