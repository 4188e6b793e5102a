use clap::Subcommand;

/// Feedback commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedbackCommands {
    /// Show both counters for an article.
    Get { article: String },
    /// Vote as this machine's reader. Repeating the current verdict is a
    /// no-op; switching counts the new verdict.
    Vote { article: String, verdict: String },
}
