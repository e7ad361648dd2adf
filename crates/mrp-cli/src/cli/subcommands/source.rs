use clap::Subcommand;

/// Source log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SourceCommands {
    /// Log a source against a run.
    Add {
        run_id: String,
        #[arg(long)]
        title: String,
        /// Source type (industry_report, academic, government, competitor,
        /// interview, survey, internal, news, other).
        #[arg(long = "type")]
        source_type: String,
        /// Link to a step of the same run.
        #[arg(long)]
        step: Option<String>,
        /// Confidence (high, medium, low). Defaults to medium.
        #[arg(long)]
        confidence: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        citation: Option<String>,
        /// Metric category (market_size, growth_rate, pricing, adoption,
        /// competitive, segment, behavioral, other).
        #[arg(long)]
        metric: Option<String>,
        #[arg(long)]
        publisher: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long)]
        key_figures: Option<String>,
        #[arg(long)]
        usage_notes: Option<String>,
        #[arg(long)]
        methodology: Option<String>,
        #[arg(long)]
        limitations: Option<String>,
        /// Date accessed (YYYY-MM-DD).
        #[arg(long)]
        date_accessed: Option<String>,
    },
    /// Get a source by ID.
    Get { id: String },
    /// Update a source.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        source_type: Option<String>,
        /// Re-link to a step of the same run.
        #[arg(long, conflicts_with = "unlink_step")]
        step: Option<String>,
        /// Remove the step link.
        #[arg(long)]
        unlink_step: bool,
        #[arg(long)]
        confidence: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        citation: Option<String>,
        #[arg(long)]
        metric: Option<String>,
        #[arg(long)]
        publisher: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long)]
        key_figures: Option<String>,
        #[arg(long)]
        usage_notes: Option<String>,
        #[arg(long)]
        methodology: Option<String>,
        #[arg(long)]
        limitations: Option<String>,
        /// Date accessed (YYYY-MM-DD).
        #[arg(long)]
        date_accessed: Option<String>,
    },
    /// Delete a source.
    Delete { id: String },
    /// List a run's sources with optional conjunctive filters.
    List {
        run_id: String,
        #[arg(long)]
        step: Option<String>,
        #[arg(long)]
        confidence: Option<String>,
        #[arg(long = "type")]
        source_type: Option<String>,
    },
}
