//! Published-article listing with the computed `search_query_highlight`
//! field, as served to the search box.

use serde::{Deserialize, Serialize};

use folio_config::{SearchConfig, SiteConfig};
use folio_core::entities::Article;
use folio_core::enums::ArticleStatus;
use folio_db::repos::ArticleFilter;
use folio_db::service::FolioService;

use crate::error::SearchError;
use crate::highlight::search_query_highlight;
use crate::query::fts_query;

/// Upper bound on `per_page`.
pub const MAX_PER_PAGE: u32 = 100;

/// One result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub link: String,
    pub search_query_highlight: String,
}

/// Parameters of a listing request.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Search term; absent or blank lists the newest articles.
    pub search: Option<String>,
    /// Result count; the configured default when absent.
    pub per_page: Option<u32>,
}

impl ListingQuery {
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            per_page: None,
        }
    }

    fn term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

fn to_hit(
    service: &FolioService,
    article: &Article,
    term: Option<&str>,
    search: &SearchConfig,
    site: &SiteConfig,
) -> SearchHit {
    let rendered = service.hooks().apply_content(article, article.content.clone());
    SearchHit {
        id: article.id.clone(),
        title: article.title.clone(),
        slug: article.slug.clone(),
        link: site.article_url(&article.slug),
        search_query_highlight: search_query_highlight(&rendered, term, search),
    }
}

/// List published documentation, ranked by relevance when a term is given
/// and newest first otherwise.
///
/// A term without any searchable word yields no results rather than an
/// error, matching what a user typing punctuation expects to see.
///
/// Matching goes through the FTS5 index, so each word must be a prefix of
/// an indexed token: `tok` finds "token" but `oken` finds nothing. The
/// highlight is a case-insensitive substring match and would still mark
/// such an infix if the article were returned.
///
/// # Errors
///
/// Returns [`SearchError::Database`] if the store query fails.
pub async fn search_listing(
    service: &FolioService,
    query: &ListingQuery,
    search: &SearchConfig,
    site: &SiteConfig,
) -> Result<Vec<SearchHit>, SearchError> {
    let per_page = query
        .per_page
        .unwrap_or(search.per_page)
        .clamp(1, MAX_PER_PAGE);
    let term = query.term();

    let articles = match term {
        Some(term) => match fts_query(term) {
            Ok(expr) => {
                service
                    .search_articles(&expr, Some(ArticleStatus::Publish), per_page)
                    .await?
            }
            Err(e) => {
                tracing::debug!(error = %e, "search term skipped");
                return Ok(Vec::new());
            }
        },
        None => {
            service
                .list_articles(&ArticleFilter::published(per_page))
                .await?
        }
    };

    tracing::debug!(term = term.unwrap_or(""), hits = articles.len(), "search listing");
    Ok(articles
        .iter()
        .map(|a| to_hit(service, a, term, search, site))
        .collect())
}
