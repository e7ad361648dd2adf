use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::StepStatus;

/// One of the 19 checklist items within a run.
///
/// Steps are materialized from the catalog at run creation and never
/// individually created or deleted afterwards; only `status` and `due_date`
/// mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchStep {
    pub id: String,
    pub research_run_id: String,
    pub order_index: u32,
    pub title: String,
    pub notes: String,
    pub status: StepStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
