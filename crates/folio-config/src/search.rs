//! Search field and listing settings.

use serde::{Deserialize, Serialize};

const fn default_window_chars() -> usize {
    120
}

const fn default_lead_chars() -> usize {
    20
}

fn default_teaser() -> String {
    "...".to_string()
}

const fn default_per_page() -> u32 {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Characters of plain text in a highlight window.
    #[serde(default = "default_window_chars")]
    pub window_chars: usize,

    /// Characters kept before the first match.
    #[serde(default = "default_lead_chars")]
    pub lead_chars: usize,

    /// Suffix appended to every window.
    #[serde(default = "default_teaser")]
    pub teaser: String,

    /// Default result count for the listing endpoint.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_chars: default_window_chars(),
            lead_chars: default_lead_chars(),
            teaser: default_teaser(),
            per_page: default_per_page(),
        }
    }
}
