use folio_core::entities::Article;
use folio_core::enums::Verdict;
use folio_core::vote::{VoteLedger, VoteState};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedbackCommands;
use crate::commands::shared::lookup::article_by_ref;
use crate::commands::shared::parse::parse_enum;
use crate::context::{AppContext, load_ledger, save_ledger};
use crate::output::output;

#[derive(Debug, Serialize)]
struct FeedbackResponse {
    article_id: String,
    helpful: u64,
    unhelpful: u64,
    vote: VoteState,
    /// Counter incremented by this call, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    recorded: Option<Verdict>,
}

/// Handle `folio feedback`.
pub async fn handle(action: &FeedbackCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = ctx.ledger_path();
    match action {
        FeedbackCommands::Get { article } => {
            let article = article_by_ref(ctx, article).await?;
            let ledger = load_ledger(&path)?;
            let response = counts(&article, ledger.state(&article.id), None, ctx).await?;
            output(&response, flags.format)
        }
        FeedbackCommands::Vote { article, verdict } => {
            let article = article_by_ref(ctx, article).await?;
            let verdict = parse_enum::<Verdict>(verdict, "verdict")?;
            let mut ledger = load_ledger(&path)?;
            let response = vote(&article, verdict, &mut ledger, ctx).await?;
            save_ledger(&path, &ledger)?;
            output(&response, flags.format)
        }
    }
}

/// Apply a click to the ledger and send the increment it calls for.
async fn vote(
    article: &Article,
    verdict: Verdict,
    ledger: &mut VoteLedger,
    ctx: &AppContext,
) -> anyhow::Result<FeedbackResponse> {
    let transition = ledger.click(&article.id, verdict);
    if let Some(increment) = transition.increment {
        ctx.service.record_feedback(&article.id, increment).await?;
    } else {
        tracing::debug!(article_id = %article.id, %verdict, "vote unchanged");
    }
    counts(article, transition.next, transition.increment, ctx).await
}

async fn counts(
    article: &Article,
    vote: VoteState,
    recorded: Option<Verdict>,
    ctx: &AppContext,
) -> anyhow::Result<FeedbackResponse> {
    Ok(FeedbackResponse {
        article_id: article.id.clone(),
        helpful: ctx.service.read_feedback(&article.id, Verdict::Helpful).await?,
        unhelpful: ctx.service.read_feedback(&article.id, Verdict::Unhelpful).await?,
        vote,
        recorded,
    })
}

#[cfg(test)]
mod tests {
    use folio_config::FolioConfig;
    use folio_core::entities::ArticleDraft;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn switching_verdict_keeps_both_counts() {
        let ctx = AppContext::in_memory(FolioConfig::default()).await;
        let article = ctx
            .service
            .create_article(ArticleDraft::new("Billing", "<p>b</p>"))
            .await
            .unwrap();
        let mut ledger = VoteLedger::new();

        let first = vote(&article, Verdict::Helpful, &mut ledger, &ctx).await.unwrap();
        assert_eq!((first.helpful, first.unhelpful), (1, 0));
        assert_eq!(first.recorded, Some(Verdict::Helpful));

        let repeat = vote(&article, Verdict::Helpful, &mut ledger, &ctx).await.unwrap();
        assert_eq!((repeat.helpful, repeat.unhelpful), (1, 0));
        assert_eq!(repeat.recorded, None);

        let switched = vote(&article, Verdict::Unhelpful, &mut ledger, &ctx).await.unwrap();
        assert_eq!((switched.helpful, switched.unhelpful), (1, 1));
        assert_eq!(switched.vote, VoteState::Unhelpful);
        assert_eq!(ledger.state(&article.id), VoteState::Unhelpful);
    }
}
