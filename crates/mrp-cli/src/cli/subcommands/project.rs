use clap::Subcommand;

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Get a project by ID.
    Get { id: String },
    /// List projects, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a project's name or description.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}
