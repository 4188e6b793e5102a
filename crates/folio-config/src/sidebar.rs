//! Sidebar rendering settings.

use serde::{Deserialize, Serialize};

const fn default_show_icons() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SidebarConfig {
    /// Append state icons to the titles of linked articles.
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            show_icons: default_show_icons(),
        }
    }
}
