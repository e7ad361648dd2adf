use mrp_core::enums::StepStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StepCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &StepCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StepCommands::List { run_id } => {
            let steps = ctx.service.list_steps(run_id).await?;
            output(&steps, flags.format)
        }
        StepCommands::Get { id } => {
            let step = ctx.service.get_step(id).await?;
            output(&step, flags.format)
        }
        StepCommands::Status { id, status } => {
            let status: StepStatus = parse_enum(status, "status")?;
            let step = ctx.service.set_step_status(id, status).await?;
            output(&step, flags.format)
        }
        StepCommands::Due { id, date, clear } => {
            let due_date = match (date.as_deref(), clear) {
                (Some(raw), false) => Some(parse_date(raw, "due date")?),
                (None, true) => None,
                (None, false) => {
                    anyhow::bail!("Either --date or --clear must be provided")
                }
                (Some(_), true) => unreachable!("clap rejects --date with --clear"),
            };
            let step = ctx.service.set_step_due_date(id, due_date).await?;
            output(&step, flags.format)
        }
    }
}
