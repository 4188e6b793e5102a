//! Row-to-entity parsing helpers.
//!
//! Timestamps are written as RFC 3339 by Rust and as `YYYY-MM-DD HH:MM:SS`
//! by `SQLite` column defaults; both parse.

use chrono::{DateTime, Utc};

use folio_core::entities::StateSet;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all folio-core enums that use `#[serde(rename_all = "snake_case")]`.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a non-negative INTEGER counter column.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u64::try_from(raw).map_err(|_| DatabaseError::Query(format!("Negative counter value {raw}")))
}

/// Decode the JSON list stored in `articles.states`.
pub fn parse_states(s: &str) -> Result<StateSet, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid states column '{s}': {e}")))
}

/// Encode a state set for `articles.states`.
pub fn encode_states(states: &StateSet) -> Result<String, DatabaseError> {
    serde_json::to_string(states).map_err(|e| DatabaseError::Other(e.into()))
}

/// Split the comma-joined ID list produced by `group_concat`.
#[must_use]
pub fn split_ids(joined: Option<String>) -> Vec<String> {
    joined
        .map(|s| {
            s.split(',')
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::enums::ArticleState;

    #[test]
    fn both_datetime_formats_parse() {
        assert!(parse_datetime("2026-02-09T14:30:00+00:00").is_ok());
        assert!(parse_datetime("2026-02-09 14:30:00").is_ok());
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn states_round_trip_through_column() {
        let states: StateSet = [ArticleState::Premium].into_iter().collect();
        let encoded = encode_states(&states).unwrap();
        assert_eq!(encoded, r#"["premium"]"#);
        assert_eq!(parse_states(&encoded).unwrap(), states);
        assert!(parse_states("[\"bogus\"]").is_err());
    }

    #[test]
    fn split_ids_handles_null_and_empty() {
        assert!(split_ids(None).is_empty());
        assert_eq!(split_ids(Some("top-1,top-2".into())), vec!["top-1", "top-2"]);
    }
}
