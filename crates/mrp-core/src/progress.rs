//! Derived read-models for run-level progress.
//!
//! Counts are always recomputed from step/source rows at read time, never
//! stored, so they cannot drift from the underlying data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-status step counts for one run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunProgress {
    pub total: u32,
    pub not_started: u32,
    pub in_progress: u32,
    pub done: u32,
    pub blocked: u32,
}

impl RunProgress {
    /// The coarse run status shown on the run page header.
    #[must_use]
    pub const fn overall(&self) -> OverallStatus {
        if self.total > 0 && self.done == self.total {
            OverallStatus::Completed
        } else if self.in_progress > 0 {
            OverallStatus::InProgress
        } else {
            OverallStatus::NotStarted
        }
    }
}

/// Coarse run status derived from step counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl OverallStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::NotStarted => "not_started",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recomputed source count for one step of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepSourceCount {
    pub research_step_id: String,
    pub count: u32,
}
