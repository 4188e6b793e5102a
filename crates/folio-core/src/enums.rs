//! Status enums, state flags, verdicts, and roles for Folio.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The `as_str()` values are what the database stores and what the HTTP and
//! CLI surfaces accept.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ArticleStatus
// ---------------------------------------------------------------------------

/// Publication status of an article.
///
/// ```text
/// draft ⇄ publish
/// ```
///
/// Only published articles are visible to anonymous readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Draft,
    Publish,
}

impl ArticleStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Publish => "publish",
        }
    }

    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Publish)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Content type of a stored entry. Feedback counters and the documentation
/// sidebar only apply to [`ContentType::Documentation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Documentation,
    Page,
}

impl ContentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArticleState
// ---------------------------------------------------------------------------

/// Informational flag attached to an article. An article with no flags is
/// "normal"; the flags are not mutually exclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ArticleState {
    Archived,
    Incomplete,
    Deprecated,
    Experimental,
    Premium,
}

impl ArticleState {
    pub const ALL: [Self; 5] = [
        Self::Archived,
        Self::Incomplete,
        Self::Deprecated,
        Self::Experimental,
        Self::Premium,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Archived => "archived",
            Self::Incomplete => "incomplete",
            Self::Deprecated => "deprecated",
            Self::Experimental => "experimental",
            Self::Premium => "premium",
        }
    }

    /// Human-readable label shown next to the state checkbox and icon.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Archived => "Archived",
            Self::Incomplete => "Incomplete",
            Self::Deprecated => "Deprecated",
            Self::Experimental => "Experimental",
            Self::Premium => "Premium",
        }
    }

    /// Notice rendered above the article body while the flag is set.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Archived => {
                "This article has been archived and may no longer be up to date with the most current information."
            }
            Self::Incomplete => {
                "This article is currently incomplete. We're working on improving it and thank you for your patience."
            }
            Self::Deprecated => {
                "This feature is deprecated and is not recommended for usage. Although it may still work, availability may cease at any time."
            }
            Self::Experimental => {
                "This feature is experimental and is not recommended for standard usage. It may change or be removed at any time."
            }
            Self::Premium => "This feature is only available to members of our premium package.",
        }
    }

    /// Parse a stored or submitted flag name. Returns `None` for unknown names.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

impl fmt::Display for ArticleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// A reader's feedback verdict on an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Helpful,
    Unhelpful,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Helpful => "helpful",
            Self::Unhelpful => "unhelpful",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Helpful => Self::Unhelpful,
            Self::Unhelpful => Self::Helpful,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of the actor performing a write. Ordered from least to most
/// privileged so capability checks can compare with `>=`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Anonymous,
    Author,
    Editor,
    Administrator,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Author => "author",
            Self::Editor => "editor",
            Self::Administrator => "administrator",
        }
    }

    /// Authors and above may edit article metadata.
    #[must_use]
    pub fn can_edit_articles(self) -> bool {
        self >= Self::Author
    }

    /// Editors and above may edit topic and menu metadata.
    #[must_use]
    pub fn can_manage_navigation(self) -> bool {
        self >= Self::Editor
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ArticleState::Archived, "\"archived\"")]
    #[case(ArticleState::Premium, "\"premium\"")]
    fn state_serializes_snake_case(#[case] state: ArticleState, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&state).unwrap(), expected);
        assert_eq!(state.as_str(), expected.trim_matches('"'));
    }

    #[test]
    fn state_parse_rejects_unknown_and_normal() {
        assert_eq!(ArticleState::parse("deprecated"), Some(ArticleState::Deprecated));
        assert_eq!(ArticleState::parse(" experimental "), Some(ArticleState::Experimental));
        assert_eq!(ArticleState::parse("normal"), None);
        assert_eq!(ArticleState::parse("bogus"), None);
    }

    #[test]
    fn role_capabilities_follow_ordering() {
        assert!(!Role::Anonymous.can_edit_articles());
        assert!(Role::Author.can_edit_articles());
        assert!(!Role::Author.can_manage_navigation());
        assert!(Role::Editor.can_manage_navigation());
        assert!(Role::Administrator.can_manage_navigation());
    }

    #[test]
    fn verdict_opposite() {
        assert_eq!(Verdict::Helpful.opposite(), Verdict::Unhelpful);
        assert_eq!(Verdict::Unhelpful.opposite(), Verdict::Helpful);
    }

    #[test]
    fn status_visibility() {
        assert!(ArticleStatus::Publish.is_public());
        assert!(!ArticleStatus::Draft.is_public());
    }
}
