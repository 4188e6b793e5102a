//! Server-rendered documentation pages: the archive, single articles and
//! topic archives, all wrapped in one layout.
//!
//! The article page carries the vote widget. Its script keeps the reader's
//! verdict in `localStorage` under `folio-vote-{id}` and follows the same
//! transitions as `VoteLedger`: a repeat click is a no-op, and a switch posts
//! to the new verdict without touching the old count.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Utc};
use folio_config::FolioConfig;
use folio_core::entities::{Article, Menu, MenuLocation, Topic};
use folio_db::repos::ArticleFilter;
use folio_markup::html::{decode_entities, escape};
use folio_markup::table_of_contents;
use folio_nav::{Direction, Navigator, item_link, parent_link, render_sidebar, state_messages};
use folio_search::teaser;

use crate::context::AppContext;

/// Most articles listed on one archive page.
const ARCHIVE_LIMIT: u32 = 45;
/// Most topics listed above the archive.
const ARCHIVE_TOPICS: usize = 7;

fn layout(title: &str, body: &str, sidebar: &str, config: &FolioConfig) -> String {
    let design = &config.design;
    let mut classes = format!(
        "folio accent-{} font-{} bg-{}",
        design.accent.as_str(),
        escape(&design.font),
        design.background.as_str()
    );
    if sidebar.is_empty() {
        classes.push_str(" menu-hidden");
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>:root{{--clr-active:{accent};}}</style></head>\
         <body class=\"{classes}\"><aside class=\"sidebar\">{sidebar}</aside>\
         <main class=\"content\">{body}</main></body></html>\n",
        title = escape(title),
        accent = design.accent.css(),
    )
}

/// Body of the 404 page.
pub fn not_found() -> String {
    layout(
        "Not found",
        "<h1>Not found</h1><p>No documentation lives at this address.</p>",
        "",
        &FolioConfig::default(),
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `October 18th, 2026`
fn long_date(at: DateTime<Utc>) -> String {
    format!(
        "{} {}{}, {}",
        at.format("%B"),
        at.day(),
        ordinal_suffix(at.day()),
        at.year()
    )
}

async fn sidebar_for(
    nav: &Navigator<'_>,
    menu: Option<&Menu>,
    current: Option<&str>,
    config: &FolioConfig,
) -> anyhow::Result<String> {
    let Some(menu) = menu else {
        return Ok(String::new());
    };
    let links = nav.links(menu, &config.site).await?;
    Ok(render_sidebar(&links, current, config.sidebar.show_icons))
}

async fn default_menu(ctx: &AppContext) -> anyhow::Result<Option<Menu>> {
    match ctx.service.menu_at_location(MenuLocation::DEFAULT).await? {
        Some(id) => Ok(ctx.service.find_menu(&id).await?),
        None => Ok(None),
    }
}

/// Link to the first destination of `menu`, as the archive's "next" button.
async fn first_destination(
    nav: &Navigator<'_>,
    menu: Option<&Menu>,
    config: &FolioConfig,
) -> anyhow::Result<String> {
    let Some(item) = menu.and_then(|m| m.items.iter().find(|i| i.target.is_destination())) else {
        return Ok(String::new());
    };
    let link = nav.link(item, &config.site).await?;
    Ok(format!(
        "<nav class=\"footer-nav\">{}</nav>",
        item_link(&link, "footer-page footer-next", false, config.sidebar.show_icons)
    ))
}

fn article_cards(ctx: &AppContext, articles: &[Article]) -> String {
    if articles.is_empty() {
        return "<p class=\"no-articles\">Nothing has been published yet.</p>".to_string();
    }
    let mut out = String::from("<ul class=\"article-list\">");
    for article in articles {
        let content = ctx.service.hooks().apply_content(article, article.content.clone());
        let _ = write!(
            out,
            "<li class=\"article-card\"><a class=\"article-link\" href=\"{}\"><h2 class=\"h4\">{}</h2>\
             <p>{}</p></a></li>",
            escape(&ctx.config.site.article_url(&article.slug)),
            escape(&article.title),
            escape(&decode_entities(&teaser(&content, &ctx.config.search))),
        );
    }
    out.push_str("</ul>");
    out
}

/// The documentation home: site title, topics and newest articles.
pub async fn archive(ctx: &AppContext) -> anyhow::Result<String> {
    let site = &ctx.config.site;
    let nav = Navigator::new(&ctx.service);
    let menu = default_menu(ctx).await?;

    let mut body = format!("<h1>{}</h1>", escape(&site.home_title));
    if !site.home_intro.is_empty() {
        let _ = write!(body, "<p class=\"intro\">{}</p>", escape(&site.home_intro));
    }
    if site.show_topics {
        let topics = ctx.service.list_topics().await?;
        if !topics.is_empty() {
            body.push_str("<ul class=\"topic-list\">");
            for topic in topics.iter().take(ARCHIVE_TOPICS) {
                let _ = write!(
                    body,
                    "<li><a href=\"{}\">{}</a></li>",
                    escape(&site.topic_url(&topic.slug)),
                    escape(&topic.name)
                );
            }
            body.push_str("</ul>");
        }
    }

    let articles = ctx.service.list_articles(&ArticleFilter::published(ARCHIVE_LIMIT)).await?;
    body.push_str(&article_cards(ctx, &articles));
    body.push_str(&first_destination(&nav, menu.as_ref(), &ctx.config).await?);

    let sidebar = sidebar_for(&nav, menu.as_ref(), None, &ctx.config).await?;
    Ok(layout(&site.home_title, &body, &sidebar, &ctx.config))
}

/// Published articles carrying `topic`, under the topic's own menu or the
/// default one.
pub async fn topic_page(ctx: &AppContext, topic: &Topic) -> anyhow::Result<String> {
    let nav = Navigator::new(&ctx.service);
    let menu = match &topic.menu_id {
        Some(id) => match ctx.service.find_menu(id).await? {
            Some(menu) => Some(menu),
            None => default_menu(ctx).await?,
        },
        None => default_menu(ctx).await?,
    };

    let mut body = format!("<h1>{}</h1>", escape(&topic.name));
    if let Some(description) = topic.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(body, "<p class=\"topic-description\">{}</p>", escape(description));
    }
    let filter = ArticleFilter {
        topic_id: Some(topic.id.clone()),
        ..ArticleFilter::published(ARCHIVE_LIMIT)
    };
    let articles = ctx.service.list_articles(&filter).await?;
    body.push_str(&article_cards(ctx, &articles));

    let sidebar = sidebar_for(&nav, menu.as_ref(), None, &ctx.config).await?;
    Ok(layout(&topic.name, &body, &sidebar, &ctx.config))
}

/// Client half of the vote widget. Reads `data-api` and `data-article` from
/// each `.feedback` box.
const VOTE_SCRIPT: &str = r"<script>
document.querySelectorAll('.feedback').forEach(function (box) {
  var key = 'folio-vote-' + box.dataset.article;
  function mark() { box.dataset.vote = localStorage.getItem(key) || 'unset'; }
  function vote(verdict) {
    if (localStorage.getItem(key) === verdict) { return; }
    fetch(box.dataset.api + verdict + '/' + encodeURIComponent(box.dataset.article), { method: 'POST' })
      .then(function (res) { return res.json(); })
      .then(function (count) {
        box.querySelector('[data-' + verdict + '-count]').textContent = count;
        localStorage.setItem(key, verdict);
        mark();
      });
  }
  box.querySelector('[data-helpful]').addEventListener('click', function () { vote('helpful'); });
  box.querySelector('[data-unhelpful]').addEventListener('click', function () { vote('unhelpful'); });
  mark();
});
</script>";

fn vote_widget(article: &Article, config: &FolioConfig) -> String {
    let mut out = format!(
        "<div class=\"feedback\" data-article=\"{id}\" data-api=\"{api}\" data-vote=\"unset\">\
         <span>Was this page helpful?</span>\
         <button type=\"button\" data-helpful>Yes <span data-helpful-count>{helpful}</span></button>\
         <button type=\"button\" data-unhelpful>No <span data-unhelpful-count>{unhelpful}</span></button></div>",
        id = escape(&article.id),
        api = escape(&format!("{}folio/v1/", config.site.base())),
        helpful = article.helpful,
        unhelpful = article.unhelpful,
    );
    out.push_str(VOTE_SCRIPT);
    out
}

/// One published article with its sidebar, outline, neighbours and vote
/// widget. `after_render` hooks see the finished page.
pub async fn article_page(ctx: &AppContext, article: &Article) -> anyhow::Result<String> {
    let config = &ctx.config;
    let site = &config.site;
    let show_icons = config.sidebar.show_icons;
    let mut nav = Navigator::new(&ctx.service);

    let menu = nav.menu(article).await?;
    let mut sidebar = String::new();
    if let Some(parent) = nav.sidebar_parent(article).await? {
        sidebar.push_str(&parent_link(&parent.title, &site.article_url(&parent.slug)));
    }
    sidebar.push_str(&sidebar_for(&nav, menu.as_ref(), Some(&article.id), config).await?);

    let mut body = String::new();
    if let Some(topic) = nav.breadcrumbs(article).await?.generic {
        let _ = write!(
            body,
            "<small class=\"page_topic\"><a href=\"{}\">{}</a></small>",
            escape(&site.topic_url(&topic.slug)),
            escape(&topic.name)
        );
    }
    let _ = write!(body, "<h1>{}</h1>", escape(&article.title));
    body.push_str(&state_messages(&article.states));

    let content = ctx.service.hooks().apply_content(article, article.content.clone());
    let toc = table_of_contents(&content, config.toc.heading_depth);
    if !toc.is_empty() {
        let _ = write!(
            body,
            "<div class=\"page_contents\"><h2 class=\"h4\">On this page</h2>{toc}</div>"
        );
    }
    let _ = write!(body, "<article class=\"page_body\">{content}</article>");

    let mut footer = String::new();
    for direction in [Direction::Prev, Direction::Next] {
        if let Some(item) = nav.adjacent(article, direction).await? {
            let link = nav.link(&item, site).await?;
            let class = format!("footer-page footer-{}", direction.as_str());
            footer.push_str(&item_link(&link, &class, false, show_icons));
        }
    }
    if !footer.is_empty() {
        let _ = write!(body, "<nav class=\"footer-nav\">{footer}</nav>");
    }

    body.push_str(&vote_widget(article, config));
    let _ = write!(
        body,
        "<p class=\"last-updated\">Last updated {}</p>",
        long_date(article.updated_at)
    );

    let page = layout(&article.title, &body, &sidebar, config);
    Ok(ctx.service.hooks().apply_after_render(article, page))
}
