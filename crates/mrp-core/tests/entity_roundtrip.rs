//! Serde roundtrip tests for all entity types.

use chrono::{NaiveDate, Utc};
use mrp_core::entities::*;
use mrp_core::enums::*;
use pretty_assertions::assert_eq;

macro_rules! roundtrip {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );
        }
    };
}

roundtrip!(
    project_roundtrip,
    Project,
    Project {
        id: "prj-a3f8b2c1".into(),
        name: "Aurora".into(),
        description: Some("AI-native OTA alternative for global hostel booking".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip!(
    run_roundtrip,
    ResearchRun,
    ResearchRun {
        id: "run-c4e2d1f0".into(),
        project_id: "prj-a3f8b2c1".into(),
        label: "MR-2025-Q1".into(),
        description: None,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
        end_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip!(
    step_roundtrip,
    ResearchStep,
    ResearchStep {
        id: "stp-b7a3f9e2".into(),
        research_run_id: "run-c4e2d1f0".into(),
        order_index: 5,
        title: "Secondary Research \u{2013} Market Size & Growth".into(),
        notes: "Collect external data on market size.".into(),
        status: StepStatus::InProgress,
        due_date: NaiveDate::from_ymd_opt(2025, 2, 14),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip!(
    source_roundtrip,
    Source,
    Source {
        id: "src-e1c4b2d3".into(),
        research_run_id: "run-c4e2d1f0".into(),
        research_step_id: Some("stp-b7a3f9e2".into()),
        project_id: Some("prj-a3f8b2c1".into()),
        title: "UNWTO Tourism Highlights 2024".into(),
        url: Some("https://www.unwto.org/tourism-data".into()),
        citation: Some("UNWTO (2024). Tourism Highlights, 2024 Edition.".into()),
        source_type: SourceType::Government,
        confidence: Confidence::High,
        metric_category: Some(MetricCategory::MarketSize),
        publisher: Some("UNWTO".into()),
        year: Some(2024),
        geography: Some("Global".into()),
        key_figures: Some("1.4B international arrivals".into()),
        usage_notes: None,
        methodology: Some("National statistics aggregation".into()),
        limitations: Some("Lags one year behind".into()),
        date_accessed: NaiveDate::from_ymd_opt(2025, 1, 20),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip!(
    source_minimal_roundtrip,
    Source,
    Source {
        id: "src-00000001".into(),
        research_run_id: "run-c4e2d1f0".into(),
        research_step_id: None,
        project_id: None,
        title: "Internal booking analytics".into(),
        url: None,
        citation: None,
        source_type: SourceType::Internal,
        confidence: Confidence::Medium,
        metric_category: None,
        publisher: None,
        year: None,
        geography: None,
        key_figures: None,
        usage_notes: None,
        methodology: None,
        limitations: None,
        date_accessed: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);
