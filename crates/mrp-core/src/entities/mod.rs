//! Entity structs for the four MRP tables.

mod project;
mod run;
mod source;
mod step;

pub use project::Project;
pub use run::ResearchRun;
pub use source::Source;
pub use step::ResearchStep;
