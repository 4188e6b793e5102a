//! Partial-update records for stored entities.

pub mod article;
pub mod topic;
