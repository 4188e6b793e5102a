use clap::Subcommand;

/// Menu commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// Create a menu.
    Create {
        name: String,
        /// Also make it the default documentation sidebar.
        #[arg(long)]
        default: bool,
    },
    /// Append an item. Without --article or --url the item is a placeholder.
    AddItem {
        menu: String,
        /// Label; article items default to the article title.
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "url")]
        article: Option<String>,
        #[arg(long)]
        url: Option<String>,
        /// Parent item ID.
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        position: Option<u32>,
        /// Link `title` attribute.
        #[arg(long)]
        attr_title: Option<String>,
        /// Link `target` attribute, e.g. `_blank`.
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        rel: Option<String>,
        #[arg(long)]
        class: Option<String>,
    },
    /// List menus with their items.
    List,
    /// Make a menu the default documentation sidebar; omit it to clear.
    SetDefault { menu: Option<String> },
    /// Set the page linked above the sidebar; omit or pass 0 to clear it.
    SetParentPage {
        id: String,
        page: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
}
