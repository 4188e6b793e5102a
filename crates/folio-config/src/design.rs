//! Visual design settings for rendered pages.

use serde::{Deserialize, Serialize};

/// Decorative background behind the documentation header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    #[default]
    Wave,
    Grid,
    Dots,
    None,
}

impl Background {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Grid => "grid",
            Self::Dots => "dots",
            Self::None => "none",
        }
    }
}

/// Accent colour used for links and active states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Blue,
    Teal,
    Green,
    Orange,
    Red,
    Purple,
    Fuchsia,
}

impl Accent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
        }
    }

    /// CSS colour value for `--clr-active`.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Blue => "#2563eb",
            Self::Teal => "#0d9488",
            Self::Green => "#16a34a",
            Self::Orange => "#ea580c",
            Self::Red => "#dc2626",
            Self::Purple => "#9333ea",
            Self::Fuchsia => "#c026d3",
        }
    }
}

fn default_font() -> String {
    "poppins".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DesignConfig {
    #[serde(default)]
    pub background: Background,

    #[serde(default)]
    pub accent: Accent,

    #[serde(default = "default_font")]
    pub font: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            background: Background::default(),
            accent: Accent::default(),
            font: default_font(),
        }
    }
}
