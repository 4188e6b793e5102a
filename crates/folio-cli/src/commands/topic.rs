use folio_core::meta::{TopicMeta, parse_page_ref};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TopicCommands;
use crate::commands::shared::parse::parse_actor;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio topic`.
pub async fn handle(action: &TopicCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TopicCommands::Create {
            name,
            parent,
            description,
        } => {
            let topic = ctx
                .service
                .create_topic(name, parent.as_deref(), description.as_deref())
                .await?;
            output(&topic, flags.format)
        }
        TopicCommands::List => {
            let topics = ctx.service.list_topics().await?;
            output(&json!({ "topics": topics }), flags.format)
        }
        TopicCommands::SetMenu { id, menu, role } => {
            let meta = TopicMeta {
                menu: Some(menu.clone()),
                ..TopicMeta::default()
            };
            write(id, meta, role.as_deref(), ctx, flags).await
        }
        TopicCommands::SetParentPage { id, page, role } => {
            let meta = TopicMeta {
                parent_page: Some(page.as_deref().and_then(parse_page_ref)),
                ..TopicMeta::default()
            };
            write(id, meta, role.as_deref(), ctx, flags).await
        }
    }
}

async fn write(
    id: &str,
    meta: TopicMeta,
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = parse_actor(role)?;
    let outcome = ctx.service.write_topic_meta(&actor, id, meta).await?;
    let topic = ctx.service.get_topic(id).await?;
    output(&json!({ "topic": topic, "outcome": outcome }), flags.format)
}
