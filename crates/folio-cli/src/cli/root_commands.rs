use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ArticleCommands, FeedbackCommands, MenuCommands, NavCommands, TopicCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize folio for a project.
    Init(InitArgs),
    /// Serve rendered pages and the JSON endpoints.
    Serve(ServeArgs),
    /// Import markdown, HTML or text files as draft articles.
    Import(ImportArgs),
    /// Documentation articles.
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },
    /// Topics.
    Topic {
        #[command(subcommand)]
        action: TopicCommands,
    },
    /// Sidebar menus.
    Menu {
        #[command(subcommand)]
        action: MenuCommands,
    },
    /// Sidebar resolution and prev/next links for an article.
    Nav {
        #[command(subcommand)]
        action: NavCommands,
    },
    /// Table of contents for an article.
    Toc(TocArgs),
    /// Search published documentation.
    Search(SearchArgs),
    /// Helpful/unhelpful counters.
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Site title written to the new config.
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Files or directories to import.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct TocArgs {
    /// Article ID or slug.
    pub article: String,
    /// Deepest heading depth to include (overrides `toc.heading_depth`).
    #[arg(long)]
    pub depth: Option<u8>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search term; omit to list the newest articles.
    pub query: Option<String>,
    /// Number of results (1-100).
    #[arg(long)]
    pub per_page: Option<u32>,
}
