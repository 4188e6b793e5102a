//! Documentation home page settings.

use serde::{Deserialize, Serialize};

fn default_home_title() -> String {
    "Documentation".to_string()
}

const fn default_show_topics() -> bool {
    true
}

fn default_base_url() -> String {
    "/".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Heading of the documentation archive page.
    #[serde(default = "default_home_title")]
    pub home_title: String,

    /// Introductory paragraph under the heading.
    #[serde(default)]
    pub home_intro: String,

    /// Whether the archive lists topics above the articles.
    #[serde(default = "default_show_topics")]
    pub show_topics: bool,

    /// Prefix for every generated link. Always ends with `/` after
    /// [`SiteConfig::base`].
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl SiteConfig {
    /// `base_url` with exactly one trailing slash.
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Public URL of an article.
    #[must_use]
    pub fn article_url(&self, slug: &str) -> String {
        format!("{}docs/{slug}", self.base())
    }

    /// Public URL of a topic archive.
    #[must_use]
    pub fn topic_url(&self, slug: &str) -> String {
        format!("{}topics/{slug}", self.base())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_title: default_home_title(),
            home_intro: String::new(),
            show_topics: default_show_topics(),
            base_url: default_base_url(),
        }
    }
}
