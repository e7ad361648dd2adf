//! Status and classification enums for the MRP tracker.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Step status is deliberately a plain tagged value with no transition graph:
//! any status may follow any other, and the serde parse against the 4-member
//! set is the only guard. Manual corrections (un-marking a mistaken `done`)
//! are a supported workflow, not an error.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

/// Status of a research step within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    NotStarted,
    InProgress,
    Done,
    Blocked,
}

impl StepStatus {
    /// All valid statuses, in display order.
    pub const ALL: [Self; 4] = [Self::NotStarted, Self::InProgress, Self::Done, Self::Blocked];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Classification of a logged source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    IndustryReport,
    Academic,
    Government,
    Competitor,
    Interview,
    Survey,
    Internal,
    News,
    Other,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndustryReport => "industry_report",
            Self::Academic => "academic",
            Self::Government => "government",
            Self::Competitor => "competitor",
            Self::Interview => "interview",
            Self::Survey => "survey",
            Self::Internal => "internal",
            Self::News => "news",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Coarse reliability rating attached to a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MetricCategory
// ---------------------------------------------------------------------------

/// Which research metric a source primarily informs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    MarketSize,
    GrowthRate,
    Pricing,
    Adoption,
    Competitive,
    Segment,
    Behavioral,
    Other,
}

impl MetricCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketSize => "market_size",
            Self::GrowthRate => "growth_rate",
            Self::Pricing => "pricing",
            Self::Adoption => "adoption",
            Self::Competitive => "competitive",
            Self::Segment => "segment",
            Self::Behavioral => "behavioral",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
