use folio_hooks::{DEFAULT_PRIORITY, HookRegistry};
use folio_markup::inject_heading_ids;

/// Hooks every Folio site runs with. Heading anchors are injected as a
/// content filter so rendered pages and their table of contents agree.
#[must_use]
pub fn default_hooks() -> HookRegistry {
    let mut hooks = HookRegistry::new();
    hooks
        .content("heading_ids", DEFAULT_PRIORITY, |_, content| {
            inject_heading_ids(&content)
        })
        .after_save("log_saved", DEFAULT_PRIORITY, |article| {
            tracing::debug!(id = %article.id, status = %article.status, "article saved");
        });
    hooks
}

#[cfg(test)]
mod tests {
    use folio_core::entities::ArticleDraft;
    use folio_db::service::FolioService;
    use pretty_assertions::assert_eq;

    use super::default_hooks;

    #[tokio::test]
    async fn content_filter_anchors_headings() {
        let svc = FolioService::in_memory(default_hooks()).await.unwrap();
        let article = svc
            .create_article(ArticleDraft::new("Setup", "<h2>Install</h2><p>x</p>"))
            .await
            .unwrap();

        let rendered = svc.hooks().apply_content(&article, article.content.clone());
        assert_eq!(rendered, "<h2 id=\"install\">Install</h2><p>x</p>");
        assert_eq!(svc.hooks().content_filter_names(), vec!["heading_ids"]);
    }
}
