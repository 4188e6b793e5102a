//! # folio-nav
//!
//! Sidebar navigation for Folio articles.
//!
//! - [`Navigator`]: per-request menu resolution (article menu, topic menus
//!   walking up the topic forest, default location), prev/next lookup, the
//!   sidebar parent page, and topic breadcrumbs
//! - [`adjacent_item`]: the pure prev/next traversal that skips items
//!   without a destination
//! - [`render`]: sidebar lists, menu item links, state icons and notices
//!
//! Absent menus, articles and topics are `None` throughout; callers render
//! without the corresponding piece.

mod adjacent;
pub mod error;
mod navigator;
pub mod render;

pub use adjacent::{Direction, adjacent_item};
pub use error::NavError;
pub use navigator::{Breadcrumbs, MenuSource, Navigator, ResolvedMenu};
pub use render::{MenuLink, item_link, parent_link, render_sidebar, state_icon, state_messages};
