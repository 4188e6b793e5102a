//! Table-of-contents settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_heading_depth() -> u8 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TocConfig {
    /// Deepest relative heading depth included in the outline.
    #[serde(default = "default_heading_depth")]
    pub heading_depth: u8,
}

impl TocConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=6).contains(&self.heading_depth) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "toc.heading_depth".into(),
                reason: format!("{} is outside 1..=6", self.heading_depth),
            })
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            heading_depth: default_heading_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_is_three() {
        assert_eq!(TocConfig::default().heading_depth, 3);
        assert!(TocConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_depth_is_invalid() {
        let err = TocConfig { heading_depth: 0 }.validate().unwrap_err();
        assert!(err.to_string().contains("toc.heading_depth"));
    }
}
