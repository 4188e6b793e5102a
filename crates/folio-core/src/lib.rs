//! # folio-core
//!
//! Core types, ID prefixes, and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - Entity structs for the documentation domain (articles, topics, menus)
//! - Status enums, article state flags, and the vote widget state machine
//! - Typed metadata records validated at the write boundary
//! - ID prefix constants
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod meta;
pub mod vote;
