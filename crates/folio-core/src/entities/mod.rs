//! Entity structs for the documentation domain.
//!
//! All entities derive `Serialize`, `Deserialize`, `JsonSchema`, `Clone`,
//! `Debug`, `PartialEq`, `Eq`. Timestamps use `chrono::DateTime<Utc>`.

pub mod article;
pub mod menu;
pub mod topic;

pub use article::{Article, ArticleDraft, StateSet};
pub use menu::{Menu, MenuItem, MenuLocation, MenuTarget};
pub use topic::Topic;
