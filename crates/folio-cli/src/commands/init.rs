use std::path::{Path, PathBuf};

use anyhow::Context;
use folio_config::{FolioConfig, PROJECT_DIR};
use folio_db::service::FolioService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::default_hooks;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: PathBuf,
    config: PathBuf,
    database: PathBuf,
    created: bool,
}

/// Handle `folio init`. Re-running in an existing project only fills in
/// what is missing.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match &flags.project {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = init_project(&root, args.title.as_deref()).await?;
    output(&response, flags.format)
}

async fn init_project(root: &Path, title: Option<&str>) -> anyhow::Result<InitResponse> {
    let folio_dir = root.join(PROJECT_DIR);
    let created = !folio_dir.is_dir();
    std::fs::create_dir_all(&folio_dir)
        .with_context(|| format!("failed to create {}", folio_dir.display()))?;

    let config_path = folio_dir.join("config.toml");
    if !config_path.exists() {
        let mut config = FolioConfig::default();
        if let Some(title) = title {
            config.site.home_title = title.to_string();
        }
        let rendered = toml::to_string_pretty(&config).context("failed to render default config")?;
        std::fs::write(&config_path, rendered)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let db_path = folio_dir.join("folio.db");
    FolioService::new_local(&db_path.to_string_lossy(), default_hooks())
        .await
        .context("failed to create content store")?;

    tracing::info!(root = %root.display(), created, "folio project initialized");
    Ok(InitResponse {
        project_root: root.to_path_buf(),
        config: config_path,
        database: db_path,
        created,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn creates_project_layout_and_loadable_config() {
        let temp = tempfile::tempdir().unwrap();
        let response = init_project(temp.path(), Some("Acme Docs")).await.unwrap();

        assert!(response.created);
        assert!(response.database.exists());
        let config = FolioConfig::load_from(temp.path()).unwrap();
        assert_eq!(config.site.home_title, "Acme Docs");
        assert_eq!(config.toc.heading_depth, 3);
    }

    #[tokio::test]
    async fn second_run_keeps_existing_config() {
        let temp = tempfile::tempdir().unwrap();
        init_project(temp.path(), Some("First")).await.unwrap();
        let again = init_project(temp.path(), Some("Second")).await.unwrap();

        assert!(!again.created);
        let config = FolioConfig::load_from(temp.path()).unwrap();
        assert_eq!(config.site.home_title, "First");
    }
}
