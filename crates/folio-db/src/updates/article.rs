//! Article update builder.

use serde::Serialize;

use folio_core::enums::{ArticleStatus, ContentType};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

impl ArticleUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.content_type.is_none()
            && self.status.is_none()
    }
}

#[derive(Default)]
pub struct ArticleUpdateBuilder(ArticleUpdate);

impl ArticleUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, val: impl Into<String>) -> Self {
        self.0.slug = Some(val.into());
        self
    }

    #[must_use]
    pub fn content(mut self, val: impl Into<String>) -> Self {
        self.0.content = Some(val.into());
        self
    }

    #[must_use]
    pub const fn content_type(mut self, val: ContentType) -> Self {
        self.0.content_type = Some(val);
        self
    }

    #[must_use]
    pub const fn status(mut self, val: ArticleStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> ArticleUpdate {
        self.0
    }
}
