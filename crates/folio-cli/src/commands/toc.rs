use folio_markup::{build_outline, extract_headings, render_toc};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TocArgs;
use crate::commands::shared::lookup::article_by_ref;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio toc`. Headings are read from the filtered content, so the
/// anchors match what the rendered page carries.
pub async fn handle(args: &TocArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let depth = args.depth.unwrap_or(ctx.config.toc.heading_depth);
    if !(1..=6).contains(&depth) {
        anyhow::bail!("invalid depth {depth}: expected 1-6");
    }

    let article = article_by_ref(ctx, &args.article).await?;
    let content = ctx.service.hooks().apply_content(&article, article.content.clone());
    let outline = build_outline(extract_headings(&content, depth));
    output(
        &json!({
            "article_id": article.id,
            "depth": depth,
            "outline": outline,
            "html": render_toc(&outline),
        }),
        flags.format,
    )
}
