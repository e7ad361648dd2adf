use clap::Subcommand;

/// Protocol step commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StepCommands {
    /// List a run's steps in protocol order.
    List { run_id: String },
    /// Get a step by ID.
    Get { id: String },
    /// Record a step's status (not_started, in_progress, done, blocked).
    Status { id: String, status: String },
    /// Set or clear a step's due date.
    Due {
        id: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long, conflicts_with = "clear")]
        date: Option<String>,
        /// Clear the due date.
        #[arg(long)]
        clear: bool,
    },
}
