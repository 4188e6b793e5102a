//! ID prefix constants.
//!
//! Every stored entity gets an ID of the form `{prefix}-{8 hex chars}`,
//! e.g. `art-a3f8b2c1`. The database layer generates the random part.

pub const PREFIX_ARTICLE: &str = "art";
pub const PREFIX_TOPIC: &str = "top";
pub const PREFIX_MENU: &str = "mnu";
pub const PREFIX_MENU_ITEM: &str = "itm";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_ARTICLE,
    PREFIX_TOPIC,
    PREFIX_MENU,
    PREFIX_MENU_ITEM,
];

/// Check whether `id` looks like a Folio ID with the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_check_accepts_generated_shape() {
        assert!(has_prefix("art-a3f8b2c1", PREFIX_ARTICLE));
        assert!(!has_prefix("art-", PREFIX_ARTICLE));
        assert!(!has_prefix("top-a3f8b2c1", PREFIX_ARTICLE));
        assert!(!has_prefix("art-zzzz", PREFIX_ARTICLE));
    }
}
