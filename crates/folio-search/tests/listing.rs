use folio_config::{SearchConfig, SiteConfig};
use folio_core::entities::ArticleDraft;
use folio_core::enums::{ArticleStatus, ContentType};
use folio_db::service::FolioService;
use folio_hooks::{DEFAULT_PRIORITY, HookRegistry};
use folio_search::{ListingQuery, search_listing};
use pretty_assertions::assert_eq;

async fn seeded(hooks: HookRegistry) -> FolioService {
    let svc = FolioService::in_memory(hooks).await.unwrap();
    let docs = [
        ("API Tokens", "<p>Every request needs a token. Rotate your token after leaks.</p>", ArticleStatus::Publish),
        ("Billing", "<p>Invoices are sent monthly.</p>", ArticleStatus::Publish),
        ("Token drafts", "<p>Unpublished token notes.</p>", ArticleStatus::Draft),
    ];
    for (title, content, status) in docs {
        let mut draft = ArticleDraft::new(title, content);
        draft.status = status;
        svc.create_article(draft).await.unwrap();
    }
    let mut page = ArticleDraft::new("Token page", "<p>token</p>");
    page.content_type = ContentType::Page;
    page.status = ArticleStatus::Publish;
    svc.create_article(page).await.unwrap();
    svc
}

#[tokio::test]
async fn search_finds_published_documentation_only() {
    let svc = seeded(HookRegistry::new()).await;
    let hits = search_listing(
        &svc,
        &ListingQuery::search("token"),
        &SearchConfig::default(),
        &SiteConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.title, "API Tokens");
    assert_eq!(hit.link, "/docs/api-tokens");
    assert!(hit
        .search_query_highlight
        .contains("<mark class='search-query-highlight'>token</mark>"));
    assert!(hit.search_query_highlight.ends_with("..."));
}

#[tokio::test]
async fn no_term_lists_newest_with_teasers() {
    let svc = seeded(HookRegistry::new()).await;
    let hits = search_listing(
        &svc,
        &ListingQuery::default(),
        &SearchConfig::default(),
        &SiteConfig::default(),
    )
    .await
    .unwrap();

    let titles: Vec<_> = hits.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Billing", "API Tokens"]);
    assert_eq!(hits[0].search_query_highlight, "Invoices are sent monthly...");
}

#[tokio::test]
async fn per_page_limits_results() {
    let svc = seeded(HookRegistry::new()).await;
    let query = ListingQuery {
        search: None,
        per_page: Some(1),
    };
    let hits = search_listing(&svc, &query, &SearchConfig::default(), &SiteConfig::default())
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn punctuation_only_term_returns_nothing() {
    let svc = seeded(HookRegistry::new()).await;
    let hits = search_listing(
        &svc,
        &ListingQuery::search("?!"),
        &SearchConfig::default(),
        &SiteConfig::default(),
    )
    .await
    .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn excerpts_use_filtered_content() {
    let mut hooks = HookRegistry::new();
    hooks.content("shout", DEFAULT_PRIORITY, |_, content| content.replace("monthly", "MONTHLY"));
    let svc = seeded(hooks).await;
    let hits = search_listing(
        &svc,
        &ListingQuery::search("invoices"),
        &SearchConfig::default(),
        &SiteConfig::default(),
    )
    .await
    .unwrap();
    assert!(hits[0].search_query_highlight.contains("MONTHLY"));
}

async fn hits_for(svc: &FolioService, term: &str) -> Vec<folio_search::SearchHit> {
    search_listing(
        svc,
        &ListingQuery::search(term),
        &SearchConfig::default(),
        &SiteConfig::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn words_match_as_prefixes_not_infixes() {
    let svc = seeded(HookRegistry::new()).await;

    let prefix = hits_for(&svc, "tok").await;
    assert_eq!(prefix.len(), 1);
    assert_eq!(prefix[0].slug, "api-tokens");

    assert!(hits_for(&svc, "oken").await.is_empty());
}
