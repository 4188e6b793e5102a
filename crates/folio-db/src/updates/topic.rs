//! Topic update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TopicUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    /// New parent topic. Rejected if it would make the topic its own
    /// ancestor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<String>>,
}

#[derive(Default)]
pub struct TopicUpdateBuilder(TopicUpdate);

impl TopicUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: Option<String>) -> Self {
        self.0.description = Some(val);
        self
    }

    #[must_use]
    pub fn parent_id(mut self, val: Option<String>) -> Self {
        self.0.parent_id = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> TopicUpdate {
        self.0
    }
}
