use folio_core::enums::Role;
use folio_core::meta::Actor;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// The actor for a metadata write. Without `--role` the local operator acts
/// with every capability.
pub fn parse_actor(role: Option<&str>) -> anyhow::Result<Actor> {
    match role {
        Some(raw) => Ok(Actor::new(parse_enum::<Role>(raw, "role")?)),
        None => Ok(Actor::system()),
    }
}

#[cfg(test)]
mod tests {
    use folio_core::enums::{ArticleStatus, ContentType, Role};
    use pretty_assertions::assert_eq;

    use super::{parse_actor, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: ArticleStatus = parse_enum("publish", "status").expect("status should parse");
        assert_eq!(status, ArticleStatus::Publish);
    }

    #[test]
    fn parses_mixed_case() {
        let kind: ContentType = parse_enum("Documentation", "content type").expect("should parse");
        assert_eq!(kind, ContentType::Documentation);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ArticleStatus>("pending", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'pending'"));
    }

    #[test]
    fn actor_defaults_to_administrator() {
        assert_eq!(parse_actor(None).unwrap().role, Role::Administrator);
        assert_eq!(parse_actor(Some("author")).unwrap().role, Role::Author);
        assert!(parse_actor(Some("owner")).is_err());
    }
}
