//! The reader-side vote widget.
//!
//! The server never deduplicates feedback; suppression of repeat votes lives
//! entirely with the reader. [`VoteState`] is the widget's state machine and
//! [`VoteLedger`] is the persisted per-reader record keyed by article ID.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Verdict;

/// Widget state for one article.
///
/// ```text
/// unset → helpful | unhelpful      (increments the chosen counter)
/// helpful ⇄ unhelpful              (increments the new counter only)
/// same verdict again               (no-op)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteState {
    #[default]
    Unset,
    Helpful,
    Unhelpful,
}

/// Result of a button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub next: VoteState,
    /// Counter the widget must increment, if any.
    pub increment: Option<Verdict>,
}

impl VoteState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Helpful => "helpful",
            Self::Unhelpful => "unhelpful",
        }
    }

    #[must_use]
    pub const fn verdict(self) -> Option<Verdict> {
        match self {
            Self::Unset => None,
            Self::Helpful => Some(Verdict::Helpful),
            Self::Unhelpful => Some(Verdict::Unhelpful),
        }
    }

    #[must_use]
    pub const fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Helpful => Self::Helpful,
            Verdict::Unhelpful => Self::Unhelpful,
        }
    }

    /// Apply a click on the `clicked` button. The previous verdict's counter
    /// is never decremented.
    #[must_use]
    pub fn click(self, clicked: Verdict) -> VoteTransition {
        if self.verdict() == Some(clicked) {
            return VoteTransition {
                next: self,
                increment: None,
            };
        }
        VoteTransition {
            next: Self::from_verdict(clicked),
            increment: Some(clicked),
        }
    }
}

impl fmt::Display for VoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-reader vote record, persisted as a JSON object of article ID to state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VoteLedger(BTreeMap<String, VoteState>);

impl VoteLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for an article; unknown articles are unset.
    #[must_use]
    pub fn state(&self, article_id: &str) -> VoteState {
        self.0.get(article_id).copied().unwrap_or_default()
    }

    /// Click a button for an article and record the new state.
    pub fn click(&mut self, article_id: &str, clicked: Verdict) -> VoteTransition {
        let transition = self.state(article_id).click(clicked);
        self.0.insert(article_id.to_string(), transition.next);
        transition
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_click_increments_chosen_verdict() {
        let t = VoteState::Unset.click(Verdict::Helpful);
        assert_eq!(t.next, VoteState::Helpful);
        assert_eq!(t.increment, Some(Verdict::Helpful));
    }

    #[test]
    fn repeat_click_is_noop() {
        let t = VoteState::Unhelpful.click(Verdict::Unhelpful);
        assert_eq!(t.next, VoteState::Unhelpful);
        assert_eq!(t.increment, None);
    }

    #[test]
    fn switching_increments_new_verdict_only() {
        let t = VoteState::Helpful.click(Verdict::Unhelpful);
        assert_eq!(t.next, VoteState::Unhelpful);
        assert_eq!(t.increment, Some(Verdict::Unhelpful));
    }

    #[test]
    fn ledger_tracks_per_article_state() {
        let mut ledger = VoteLedger::new();
        assert_eq!(ledger.state("art-1"), VoteState::Unset);

        assert_eq!(ledger.click("art-1", Verdict::Helpful).increment, Some(Verdict::Helpful));
        assert_eq!(ledger.click("art-1", Verdict::Helpful).increment, None);
        assert_eq!(ledger.state("art-2"), VoteState::Unset);
        assert_eq!(ledger.len(), 1);

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"art-1":"helpful"}"#);
        let back: VoteLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
