//! Research run update builder.

use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct RunUpdate {
    pub label: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

pub struct RunUpdateBuilder(RunUpdate);

impl RunUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(RunUpdate::default())
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.0.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.0.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn build(self) -> RunUpdate {
        self.0
    }
}

impl Default for RunUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
