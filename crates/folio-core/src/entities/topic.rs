use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A hierarchical category assignable to articles. Topics form a forest
/// through `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    /// Sidebar menu assigned to this topic.
    pub menu_id: Option<String>,
    /// Overrides the menu's parent page when the menu was inherited through
    /// this topic.
    pub parent_page_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
