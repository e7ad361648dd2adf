use mrp_db::updates::project::ProjectUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create { name, description } => {
            let project = ctx
                .service
                .create_project(name, description.as_deref())
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::Get { id } => {
            let project = ctx.service.get_project(id).await?;
            output(&project, flags.format)
        }
        ProjectCommands::List { limit } => {
            let limit = limit.unwrap_or(ctx.config.general.default_limit);
            let projects = ctx.service.list_projects(limit).await?;
            output(&projects, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            description,
        } => {
            if name.is_none() && description.is_none() {
                anyhow::bail!("At least one of --name or --description must be provided");
            }
            let mut builder = ProjectUpdateBuilder::new();
            if let Some(name) = name.as_deref() {
                builder = builder.name(name);
            }
            if let Some(description) = description.clone() {
                builder = builder.description(Some(description));
            }
            let project = ctx.service.update_project(id, builder.build()).await?;
            output(&project, flags.format)
        }
    }
}
