use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One execution cycle of the 19-step protocol for a project.
///
/// Created only through the run initialization workflow, which also seeds
/// the 19 step rows in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchRun {
    pub id: String,
    pub project_id: String,
    pub label: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
