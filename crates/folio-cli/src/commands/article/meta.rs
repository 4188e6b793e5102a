use folio_core::entities::StateSet;
use folio_core::meta::ArticleMeta;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::article_by_ref;
use crate::commands::shared::parse::parse_actor;
use crate::context::AppContext;
use crate::output::output;

pub async fn set_state(
    reference: &str,
    states: &[String],
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let states =
        StateSet::from_names(states).map_err(|name| anyhow::anyhow!("invalid state '{name}'"))?;
    let meta = ArticleMeta {
        states: Some(states),
        ..ArticleMeta::default()
    };
    write(reference, meta, role, ctx, flags).await
}

pub async fn set_menu(
    reference: &str,
    menu: Option<&str>,
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let meta = ArticleMeta {
        menu: Some(menu.map(str::to_string)),
        ..ArticleMeta::default()
    };
    write(reference, meta, role, ctx, flags).await
}

async fn write(
    reference: &str,
    meta: ArticleMeta,
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = parse_actor(role)?;
    let article = article_by_ref(ctx, reference).await?;
    let outcome = ctx.service.write_article_meta(&actor, &article.id, meta).await?;
    let article = ctx.service.get_article(&article.id).await?;
    output(&json!({ "article": article, "outcome": outcome }), flags.format)
}
