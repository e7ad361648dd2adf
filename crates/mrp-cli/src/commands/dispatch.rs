use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Run { action } => commands::run::handle(&action, ctx, flags).await,
        Commands::Step { action } => commands::step::handle(&action, ctx, flags).await,
        Commands::Source { action } => commands::source::handle(action, ctx, flags).await,
        Commands::Init => unreachable!("init is pre-dispatched in main"),
    }
}
