//! Repository methods, one module per entity, all on `FolioService`.

pub mod article;
pub mod feedback;
pub mod menu;
pub mod topic;

pub use article::ArticleFilter;
pub use menu::NewMenuItem;
