use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::article_by_ref;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(reference: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let article = article_by_ref(ctx, reference).await?;
    let deleted = ctx.service.delete_article(&article.id).await?;
    output(&json!({ "id": article.id, "deleted": deleted }), flags.format)
}
