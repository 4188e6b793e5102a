use std::path::PathBuf;

use clap::Subcommand;

/// Article commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArticleCommands {
    /// Create an article.
    Create {
        title: String,
        /// Body markup.
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        /// Read the body from a file.
        #[arg(long)]
        file: Option<PathBuf>,
        /// draft or publish (default draft).
        #[arg(long)]
        status: Option<String>,
        /// documentation or page (default documentation).
        #[arg(long)]
        content_type: Option<String>,
        /// Topic IDs, in assignment order.
        #[arg(long)]
        topic: Vec<String>,
        #[arg(long)]
        menu: Option<String>,
        /// State flags (archived, incomplete, deprecated, experimental, premium).
        #[arg(long)]
        state: Vec<String>,
    },
    /// Get an article by ID or slug.
    Get { id: String },
    /// List articles, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        content_type: Option<String>,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Replace the article's state flags; no flags means normal.
    SetState {
        id: String,
        states: Vec<String>,
        /// Act as this role (anonymous, author, editor, administrator).
        #[arg(long)]
        role: Option<String>,
    },
    /// Assign a sidebar menu to the article; omit the menu to clear it.
    SetMenu {
        id: String,
        menu: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete an article.
    Delete { id: String },
}
