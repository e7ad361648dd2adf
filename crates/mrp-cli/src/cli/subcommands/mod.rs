pub mod project;
pub mod run;
pub mod source;
pub mod step;

pub use project::ProjectCommands;
pub use run::RunCommands;
pub use source::SourceCommands;
pub use step::StepCommands;
