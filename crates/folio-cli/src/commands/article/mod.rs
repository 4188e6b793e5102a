mod create;
mod delete;
mod get;
mod list;
mod meta;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArticleCommands;
use crate::context::AppContext;

/// Handle `folio article`.
pub async fn handle(action: &ArticleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ArticleCommands::Create {
            title,
            content,
            file,
            status,
            content_type,
            topic,
            menu,
            state,
        } => {
            let args = create::CreateArgs {
                title,
                content: content.as_deref(),
                file: file.as_deref(),
                status: status.as_deref(),
                content_type: content_type.as_deref(),
                topics: topic,
                menu: menu.as_deref(),
                states: state,
            };
            create::run(&args, ctx, flags).await
        }
        ArticleCommands::Get { id } => get::run(id, ctx, flags).await,
        ArticleCommands::List {
            status,
            content_type,
            topic,
            limit,
        } => {
            list::run(
                status.as_deref(),
                content_type.as_deref(),
                topic.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        ArticleCommands::SetState { id, states, role } => {
            meta::set_state(id, states, role.as_deref(), ctx, flags).await
        }
        ArticleCommands::SetMenu { id, menu, role } => {
            meta::set_menu(id, menu.as_deref(), role.as_deref(), ctx, flags).await
        }
        ArticleCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
