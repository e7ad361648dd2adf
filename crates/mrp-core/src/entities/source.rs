use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Confidence, MetricCategory, SourceType};

/// A logged citation/evidence record supporting claims made during a run,
/// optionally tied to a specific step of the same run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub research_run_id: String,
    pub research_step_id: Option<String>,
    pub project_id: Option<String>,
    pub title: String,
    pub url: Option<String>,
    pub citation: Option<String>,
    pub source_type: SourceType,
    pub confidence: Confidence,
    pub metric_category: Option<MetricCategory>,
    pub publisher: Option<String>,
    pub year: Option<i32>,
    pub geography: Option<String>,
    pub key_figures: Option<String>,
    pub usage_notes: Option<String>,
    pub methodology: Option<String>,
    pub limitations: Option<String>,
    pub date_accessed: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
