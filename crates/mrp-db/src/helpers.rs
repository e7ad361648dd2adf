//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed
//! entity structs. These helpers isolate the parsing logic and handle the
//! dual datetime format issue (`SQLite`'s `datetime('now')` vs Rust's
//! `to_rfc3339()`).

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>` (`"YYYY-MM-DD"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all mrp-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse an optional TEXT column into `Option<enum>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string does not match any variant.
pub fn parse_optional_enum<T: serde::de::DeserializeOwned>(
    s: Option<&str>,
) -> Result<Option<T>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => parse_enum(s).map(Some),
        _ => Ok(None),
    }
}

/// Parse user-supplied enum input (CLI flags, form values).
///
/// Same serde mechanics as [`parse_enum`] but surfaces as a `Validation`
/// failure: a bad value here is the caller's mistake, not corrupt row data.
///
/// # Errors
///
/// Returns `DatabaseError::Validation` naming the field and offending value.
pub fn parse_user_enum<T: serde::de::DeserializeOwned>(
    raw: &str,
    field: &str,
) -> Result<T, DatabaseError> {
    let normalized = raw.replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|_| DatabaseError::Validation(format!("invalid {field} '{raw}'")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrp_core::enums::{Confidence, StepStatus};

    #[test]
    fn parses_rfc3339_datetime() {
        let dt = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-02-09T14:30:00+00:00");
    }

    #[test]
    fn parses_sqlite_default_datetime() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-02-09T14:30:00+00:00");
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn optional_date_handles_null_and_empty() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_optional_date(Some("2025-01-06")).unwrap().is_some());
    }

    #[test]
    fn parse_enum_maps_row_values() {
        let status: StepStatus = parse_enum("in_progress").unwrap();
        assert_eq!(status, StepStatus::InProgress);
    }

    #[test]
    fn parse_user_enum_is_validation_error() {
        let result: Result<StepStatus, _> = parse_user_enum("archived", "status");
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[test]
    fn parse_user_enum_accepts_hyphenated_alias() {
        let status: StepStatus = parse_user_enum("in-progress", "status").unwrap();
        assert_eq!(status, StepStatus::InProgress);
        let confidence: Confidence = parse_user_enum("high", "confidence").unwrap();
        assert_eq!(confidence, Confidence::High);
    }
}
