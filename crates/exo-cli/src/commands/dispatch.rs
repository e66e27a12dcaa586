use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Query(args) => commands::query::handle(&args, ctx, flags).await,
        Commands::Habitable(args) => commands::habitable::handle(&args, ctx, flags).await,
        Commands::Random(args) => commands::random::handle(&args, ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags).await,
        Commands::Score(_) | Commands::Schema => {
            unreachable!("score/schema are pre-dispatched in main")
        }
    }
}
