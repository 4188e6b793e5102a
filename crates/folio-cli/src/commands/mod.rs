pub mod article;
pub mod dispatch;
pub mod feedback;
pub mod import;
pub mod init;
pub mod menu;
pub mod nav;
pub mod search;
pub mod serve;
pub mod shared;
pub mod toc;
pub mod topic;
