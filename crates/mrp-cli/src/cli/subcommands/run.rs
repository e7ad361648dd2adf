use clap::Subcommand;

/// Research run commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RunCommands {
    /// Create a run and seed its 19 protocol steps.
    Create {
        project_id: String,
        #[arg(long)]
        label: String,
        #[arg(long)]
        description: Option<String>,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start_date: Option<String>,
    },
    /// Get a run by ID.
    Get { id: String },
    /// List a project's runs, newest first.
    List { project_id: String },
    /// Update a run's metadata.
    Update {
        id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start_date: Option<String>,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Show step progress for a run.
    Progress { id: String },
}
