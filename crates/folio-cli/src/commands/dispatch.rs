use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Article { action } => commands::article::handle(&action, ctx, flags).await,
        Commands::Topic { action } => commands::topic::handle(&action, ctx, flags).await,
        Commands::Menu { action } => commands::menu::handle(&action, ctx, flags).await,
        Commands::Nav { action } => commands::nav::handle(&action, ctx, flags).await,
        Commands::Toc(args) => commands::toc::handle(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Feedback { action } => commands::feedback::handle(&action, ctx, flags).await,
        Commands::Init(_) => unreachable!("init is pre-dispatched in main"),
    }
}
