mod app_context;
mod hooks;
mod ledger;
mod project_root;

pub use app_context::AppContext;
pub use hooks::default_hooks;
pub use ledger::{load_ledger, save_ledger};
pub use project_root::find_project_root;
