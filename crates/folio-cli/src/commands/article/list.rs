use folio_core::entities::Article;
use folio_core::enums::{ArticleStatus, ContentType};
use folio_db::repos::ArticleFilter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Listing row; bodies are left out.
#[derive(Debug, Serialize)]
struct ArticleRow {
    id: String,
    title: String,
    slug: String,
    status: ArticleStatus,
    content_type: ContentType,
    states: Vec<&'static str>,
    helpful: u64,
    unhelpful: u64,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            slug: article.slug.clone(),
            status: article.status,
            content_type: article.content_type,
            states: article.states.names(),
            helpful: article.helpful,
            unhelpful: article.unhelpful,
        }
    }
}

#[derive(Debug, Serialize)]
struct ArticleListResponse {
    articles: Vec<ArticleRow>,
}

pub async fn run(
    status: Option<&str>,
    content_type: Option<&str>,
    topic: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ArticleFilter {
        status: status
            .map(|value| parse_enum::<ArticleStatus>(value, "status"))
            .transpose()?,
        content_type: Some(
            content_type
                .map(|value| parse_enum::<ContentType>(value, "content type"))
                .transpose()?
                .unwrap_or(ContentType::Documentation),
        ),
        topic_id: topic.map(str::to_string),
        limit: limit.unwrap_or(20),
    };
    let articles = ctx.service.list_articles(&filter).await?;

    output(
        &ArticleListResponse {
            articles: articles.iter().map(ArticleRow::from).collect(),
        },
        flags.format,
    )
}
