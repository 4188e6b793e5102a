use clap::Subcommand;

/// Navigation commands. Articles are given by ID or slug.
#[derive(Clone, Debug, Subcommand)]
pub enum NavCommands {
    /// Show which menu applies, where it came from, the parent page and
    /// topic breadcrumbs.
    Resolve { article: String },
    /// Previous linked item in the article's menu.
    Prev { article: String },
    /// Next linked item in the article's menu.
    Next { article: String },
}
