use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A venture or product under research. Owns zero or more research runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
