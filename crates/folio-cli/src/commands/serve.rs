use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::server;

/// Handle `folio serve`. Runs until interrupted.
pub async fn handle(args: &ServeArgs, ctx: &AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let bind = args.bind.as_deref().unwrap_or(&ctx.config.server.bind);
    server::serve(ctx, bind).await
}
