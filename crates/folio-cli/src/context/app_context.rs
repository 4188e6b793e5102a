use std::path::PathBuf;

use anyhow::Context;
use folio_config::{FolioConfig, PROJECT_DIR};
use folio_db::service::FolioService;

use super::hooks::default_hooks;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FolioService,
    pub config: FolioConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the project's content store under `.folio/`.
    pub async fn init(project_root: PathBuf, config: FolioConfig) -> anyhow::Result<Self> {
        let db_path = project_root.join(PROJECT_DIR).join("folio.db");
        let service = FolioService::new_local(&db_path.to_string_lossy(), default_hooks())
            .await
            .with_context(|| format!("failed to open content store {}", db_path.display()))?;

        Ok(Self {
            service,
            config,
            project_root,
        })
    }

    /// Context over an in-memory store, for tests.
    #[cfg(test)]
    pub async fn in_memory(config: FolioConfig) -> Self {
        let service = FolioService::in_memory(default_hooks())
            .await
            .expect("in-memory store should open");
        Self {
            service,
            config,
            project_root: PathBuf::from("."),
        }
    }

    /// Where this machine's reader votes are recorded.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.project_root.join(PROJECT_DIR).join("votes.json")
    }
}
