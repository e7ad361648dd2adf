use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

#[cfg(test)]
mod tests {
    use mrp_core::enums::{SourceType, StepStatus};

    use super::{parse_date, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: StepStatus = parse_enum("done", "status").expect("status should parse");
        assert_eq!(status, StepStatus::Done);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let source_type: SourceType =
            parse_enum("industry-report", "type").expect("type should parse");
        assert_eq!(source_type, SourceType::IndustryReport);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<StepStatus>("archived", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'archived'"));
    }

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2025-01-06", "start date").expect("date should parse");
        assert_eq!(date.to_string(), "2025-01-06");
    }

    #[test]
    fn errors_on_invalid_date() {
        let err = parse_date("06/01/2025", "start date").expect_err("should fail");
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }
}
