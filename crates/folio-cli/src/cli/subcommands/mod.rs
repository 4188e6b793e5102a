mod article;
mod feedback;
mod menu;
mod nav;
mod topic;

pub use article::ArticleCommands;
pub use feedback::FeedbackCommands;
pub use menu::MenuCommands;
pub use nav::NavCommands;
pub use topic::TopicCommands;
