use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::article_by_ref;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(reference: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let article = article_by_ref(ctx, reference).await?;
    output(&article, flags.format)
}
