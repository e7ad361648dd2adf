//! Project update builder.

#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
