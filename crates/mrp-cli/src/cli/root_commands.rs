use clap::Subcommand;

use super::subcommands::{ProjectCommands, RunCommands, SourceCommands, StepCommands};

/// Root command tree for the `mrp` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize the local database (creates the .mrp directory).
    Init,
    /// Manage projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Manage research runs.
    Run {
        #[command(subcommand)]
        action: RunCommands,
    },
    /// Track protocol steps within a run.
    Step {
        #[command(subcommand)]
        action: StepCommands,
    },
    /// Manage the source log.
    Source {
        #[command(subcommand)]
        action: SourceCommands,
    },
}
