use folio_core::entities::Article;
use folio_nav::{Breadcrumbs, Direction, MenuLink, Navigator, ResolvedMenu};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NavCommands;
use crate::commands::shared::lookup::article_by_ref;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PageRef {
    id: String,
    title: String,
    link: String,
}

#[derive(Debug, Serialize)]
struct ResolveResponse {
    article_id: String,
    menu: Option<ResolvedMenu>,
    parent_page: Option<PageRef>,
    breadcrumbs: Breadcrumbs,
}

#[derive(Debug, Serialize)]
struct AdjacentResponse {
    article_id: String,
    direction: &'static str,
    item: Option<MenuLink>,
}

/// Handle `folio nav`.
pub async fn handle(action: &NavCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        NavCommands::Resolve { article } => {
            let article = article_by_ref(ctx, article).await?;
            output(&resolve(&article, ctx).await?, flags.format)
        }
        NavCommands::Prev { article } => adjacent(article, Direction::Prev, ctx, flags).await,
        NavCommands::Next { article } => adjacent(article, Direction::Next, ctx, flags).await,
    }
}

async fn resolve(article: &Article, ctx: &AppContext) -> anyhow::Result<ResolveResponse> {
    let mut nav = Navigator::new(&ctx.service);
    let menu = nav.resolve(article).await?;
    let parent_page = nav.sidebar_parent(article).await?.map(|page| PageRef {
        link: ctx.config.site.article_url(&page.slug),
        id: page.id,
        title: page.title,
    });
    let breadcrumbs = nav.breadcrumbs(article).await?;
    Ok(ResolveResponse {
        article_id: article.id.clone(),
        menu,
        parent_page,
        breadcrumbs,
    })
}

async fn adjacent(
    reference: &str,
    direction: Direction,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let article = article_by_ref(ctx, reference).await?;
    let mut nav = Navigator::new(&ctx.service);
    let item = match nav.adjacent(&article, direction).await? {
        Some(item) => Some(nav.link(&item, &ctx.config.site).await?),
        None => None,
    };
    output(
        &AdjacentResponse {
            article_id: article.id,
            direction: direction.as_str(),
            item,
        },
        flags.format,
    )
}
