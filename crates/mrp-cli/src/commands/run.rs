use mrp_core::progress::{OverallStatus, RunProgress};
use mrp_db::updates::run::RunUpdateBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RunCommands;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

/// Progress counts plus the derived coarse status for display.
#[derive(Serialize)]
struct ProgressReport {
    #[serde(flatten)]
    progress: RunProgress,
    overall: OverallStatus,
}

pub async fn handle(
    action: &RunCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RunCommands::Create {
            project_id,
            label,
            description,
            start_date,
        } => {
            let start_date = start_date
                .as_deref()
                .map(|raw| parse_date(raw, "start date"))
                .transpose()?;
            let run = ctx
                .service
                .create_run(project_id, label, description.as_deref(), start_date)
                .await?;
            output(&run, flags.format)
        }
        RunCommands::Get { id } => {
            let run = ctx.service.get_run(id).await?;
            output(&run, flags.format)
        }
        RunCommands::List { project_id } => {
            let runs = ctx.service.list_runs(project_id).await?;
            output(&runs, flags.format)
        }
        RunCommands::Update {
            id,
            label,
            description,
            start_date,
            end_date,
        } => {
            if label.is_none() && description.is_none() && start_date.is_none() && end_date.is_none()
            {
                anyhow::bail!(
                    "At least one of --label, --description, --start-date, or --end-date must be provided"
                );
            }
            let mut builder = RunUpdateBuilder::new();
            if let Some(label) = label.as_deref() {
                builder = builder.label(label);
            }
            if let Some(description) = description.clone() {
                builder = builder.description(Some(description));
            }
            if let Some(raw) = start_date.as_deref() {
                builder = builder.start_date(Some(parse_date(raw, "start date")?));
            }
            if let Some(raw) = end_date.as_deref() {
                builder = builder.end_date(Some(parse_date(raw, "end date")?));
            }
            let run = ctx.service.update_run(id, builder.build()).await?;
            output(&run, flags.format)
        }
        RunCommands::Progress { id } => {
            let progress = ctx.service.run_progress(id).await?;
            let report = ProgressReport {
                overall: progress.overall(),
                progress,
            };
            output(&report, flags.format)
        }
    }
}
