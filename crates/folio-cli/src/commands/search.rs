use folio_search::{ListingQuery, search_listing};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = ListingQuery {
        search: args.query.clone(),
        per_page: args.per_page,
    };
    let hits = search_listing(&ctx.service, &query, &ctx.config.search, &ctx.config.site).await?;
    output(&json!({ "results": hits }), flags.format)
}
