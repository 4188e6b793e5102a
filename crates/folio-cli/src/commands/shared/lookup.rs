use folio_core::entities::Article;

use crate::context::AppContext;

/// Find an article by ID, falling back to slug.
pub async fn article_by_ref(ctx: &AppContext, reference: &str) -> anyhow::Result<Article> {
    if let Some(article) = ctx.service.find_article(reference).await? {
        return Ok(article);
    }
    ctx.service
        .find_article_by_slug(reference)
        .await?
        .ok_or_else(|| anyhow::anyhow!("article not found: {reference}"))
}
