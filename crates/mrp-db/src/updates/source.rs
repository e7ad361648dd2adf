//! Source update builder.
//!
//! `research_run_id` and the denormalized `project_id` are deliberately not
//! updatable; a source stays with the run it was logged under.

use chrono::NaiveDate;
use mrp_core::enums::{Confidence, MetricCategory, SourceType};

#[derive(Debug, Clone, Default)]
pub struct SourceUpdate {
    pub research_step_id: Option<Option<String>>,
    pub title: Option<String>,
    pub url: Option<Option<String>>,
    pub citation: Option<Option<String>>,
    pub source_type: Option<SourceType>,
    pub confidence: Option<Confidence>,
    pub metric_category: Option<Option<MetricCategory>>,
    pub publisher: Option<Option<String>>,
    pub year: Option<Option<i32>>,
    pub geography: Option<Option<String>>,
    pub key_figures: Option<Option<String>>,
    pub usage_notes: Option<Option<String>>,
    pub methodology: Option<Option<String>>,
    pub limitations: Option<Option<String>>,
    pub date_accessed: Option<Option<NaiveDate>>,
}

pub struct SourceUpdateBuilder(SourceUpdate);

impl SourceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SourceUpdate::default())
    }

    #[must_use]
    pub fn research_step_id(mut self, research_step_id: Option<String>) -> Self {
        self.0.research_step_id = Some(research_step_id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: Option<String>) -> Self {
        self.0.url = Some(url);
        self
    }

    #[must_use]
    pub fn citation(mut self, citation: Option<String>) -> Self {
        self.0.citation = Some(citation);
        self
    }

    #[must_use]
    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.0.source_type = Some(source_type);
        self
    }

    #[must_use]
    pub fn confidence(mut self, confidence: Confidence) -> Self {
        self.0.confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn metric_category(mut self, metric_category: Option<MetricCategory>) -> Self {
        self.0.metric_category = Some(metric_category);
        self
    }

    #[must_use]
    pub fn publisher(mut self, publisher: Option<String>) -> Self {
        self.0.publisher = Some(publisher);
        self
    }

    #[must_use]
    pub fn year(mut self, year: Option<i32>) -> Self {
        self.0.year = Some(year);
        self
    }

    #[must_use]
    pub fn geography(mut self, geography: Option<String>) -> Self {
        self.0.geography = Some(geography);
        self
    }

    #[must_use]
    pub fn key_figures(mut self, key_figures: Option<String>) -> Self {
        self.0.key_figures = Some(key_figures);
        self
    }

    #[must_use]
    pub fn usage_notes(mut self, usage_notes: Option<String>) -> Self {
        self.0.usage_notes = Some(usage_notes);
        self
    }

    #[must_use]
    pub fn methodology(mut self, methodology: Option<String>) -> Self {
        self.0.methodology = Some(methodology);
        self
    }

    #[must_use]
    pub fn limitations(mut self, limitations: Option<String>) -> Self {
        self.0.limitations = Some(limitations);
        self
    }

    #[must_use]
    pub fn date_accessed(mut self, date_accessed: Option<NaiveDate>) -> Self {
        self.0.date_accessed = Some(date_accessed);
        self
    }

    #[must_use]
    pub fn build(self) -> SourceUpdate {
        self.0
    }
}

impl Default for SourceUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
