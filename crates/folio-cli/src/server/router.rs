use folio_core::enums::{ArticleStatus, Verdict};
use folio_search::{ListingQuery, search_listing};
use serde::Serialize;
use serde_json::json;
use tiny_http::Method;

use crate::context::AppContext;

use super::pages;

const JSON: &str = "application/json; charset=utf-8";
const HTML: &str = "text/html; charset=utf-8";

/// A response ready to hand to the listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(value: &T) -> anyhow::Result<Self> {
        Ok(Self {
            status: 200,
            content_type: JSON,
            body: serde_json::to_string(value)?,
        })
    }

    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: JSON,
            body: json!({ "error": message }).to_string(),
        }
    }

    fn page_not_found() -> Self {
        Self {
            status: 404,
            ..Self::html(pages::not_found())
        }
    }
}

/// Route one request.
///
/// - `GET|POST /folio/v1/{helpful,unhelpful}/{id}`: counter value, or the new
///   value after a POST
/// - `GET /folio/v1/docs?search=&per_page=`: search listing
/// - `GET /`, `GET /docs`: archive
/// - `GET /docs/{slug}`: published article
/// - `GET /topics/{slug}`: topic archive
pub async fn route(method: &Method, url: &str, ctx: &AppContext) -> ApiResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let result = match segments.as_slice() {
        ["folio", "v1", kind @ ("helpful" | "unhelpful"), id] => {
            feedback(method, kind, &decode(id), ctx).await
        }
        ["folio", "v1", "docs"] if *method == Method::Get => search(query, ctx).await,
        ["folio", "v1", "docs"] => Ok(ApiResponse::error(405, "method not allowed")),
        ["folio", ..] => Ok(ApiResponse::error(404, "no route")),
        _ if *method != Method::Get => Ok(ApiResponse::error(405, "method not allowed")),
        [] | ["docs"] => pages::archive(ctx).await.map(ApiResponse::html),
        ["docs", slug] => article(&decode(slug), ctx).await,
        ["topics", slug] => topic(&decode(slug), ctx).await,
        _ => Ok(ApiResponse::page_not_found()),
    };

    result.unwrap_or_else(|error| {
        tracing::warn!(error = format!("{error:#}"), path, "request failed");
        ApiResponse::error(500, "internal error")
    })
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_string(), |s| s.into_owned())
}

/// Decode `a=1&b=two+words` into pairs. Malformed escapes keep their raw text.
fn query_params(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(&key.replace('+', " ")), decode(&value.replace('+', " ")))
        })
        .collect()
}

async fn feedback(method: &Method, kind: &str, id: &str, ctx: &AppContext) -> anyhow::Result<ApiResponse> {
    let verdict = if kind == "helpful" {
        Verdict::Helpful
    } else {
        Verdict::Unhelpful
    };
    let count = match method {
        Method::Get => ctx.service.read_feedback(id, verdict).await?,
        Method::Post => ctx.service.record_feedback(id, verdict).await?,
        _ => return Ok(ApiResponse::error(405, "method not allowed")),
    };
    ApiResponse::json(&count)
}

async fn search(query: &str, ctx: &AppContext) -> anyhow::Result<ApiResponse> {
    let mut listing = ListingQuery::default();
    for (key, value) in query_params(query) {
        match key.as_str() {
            "search" => listing.search = Some(value),
            "per_page" => match value.parse() {
                Ok(n) => listing.per_page = Some(n),
                Err(_) => return Ok(ApiResponse::error(400, "per_page must be a positive integer")),
            },
            _ => {}
        }
    }
    let hits = search_listing(&ctx.service, &listing, &ctx.config.search, &ctx.config.site).await?;
    ApiResponse::json(&hits)
}

async fn article(slug: &str, ctx: &AppContext) -> anyhow::Result<ApiResponse> {
    match ctx.service.find_article_by_slug(slug).await? {
        Some(article) if article.status == ArticleStatus::Publish => {
            Ok(ApiResponse::html(pages::article_page(ctx, &article).await?))
        }
        _ => Ok(ApiResponse::page_not_found()),
    }
}

async fn topic(slug: &str, ctx: &AppContext) -> anyhow::Result<ApiResponse> {
    match ctx.service.find_topic_by_slug(slug).await? {
        Some(topic) => Ok(ApiResponse::html(pages::topic_page(ctx, &topic).await?)),
        None => Ok(ApiResponse::page_not_found()),
    }
}
