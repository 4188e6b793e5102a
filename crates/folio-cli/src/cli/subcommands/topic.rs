use clap::Subcommand;

/// Topic commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TopicCommands {
    /// Create a topic.
    Create {
        name: String,
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List topics.
    List,
    /// Assign a sidebar menu to the topic; omit the menu to clear it.
    SetMenu {
        id: String,
        menu: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Set the page linked above the sidebar; omit or pass 0 to clear it.
    SetParentPage {
        id: String,
        page: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
}
