use std::path::Path;

use anyhow::Context;
use folio_core::entities::{ArticleDraft, StateSet};
use folio_core::enums::{ArticleStatus, ContentType};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct CreateArgs<'a> {
    pub title: &'a str,
    pub content: Option<&'a str>,
    pub file: Option<&'a Path>,
    pub status: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub topics: &'a [String],
    pub menu: Option<&'a str>,
    pub states: &'a [String],
}

pub async fn run(args: &CreateArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content.to_string(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };

    let mut draft = ArticleDraft::new(args.title, content);
    if let Some(status) = args.status {
        draft.status = parse_enum::<ArticleStatus>(status, "status")?;
    }
    if let Some(content_type) = args.content_type {
        draft.content_type = parse_enum::<ContentType>(content_type, "content type")?;
    }
    draft.topic_ids = args.topics.to_vec();
    draft.menu_id = args.menu.map(str::to_string);
    draft.states = StateSet::from_names(args.states)
        .map_err(|name| anyhow::anyhow!("invalid state '{name}'"))?;

    let article = ctx.service.create_article(draft).await?;
    output(&article, flags.format)
}
