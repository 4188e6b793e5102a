//! Batch import of files as draft documentation articles.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use folio_core::entities::ArticleDraft;
use folio_core::enums::ArticleStatus;
use folio_db::service::FolioService;

use crate::error::ImportError;
use crate::source::{SourceFormat, extract};

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ImportOutcome {
    Created { article_id: String },
    /// An article already uses the slug derived from the title.
    Duplicate { title: String },
    Unreadable { reason: String },
    Failed { reason: String },
}

impl ImportOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file_name: String,
    #[serde(flatten)]
    pub outcome: ImportOutcome,
}

impl FileReport {
    /// User-facing line for this file.
    #[must_use]
    pub fn message(&self) -> String {
        let name = &self.file_name;
        match &self.outcome {
            ImportOutcome::Created { .. } => format!("Article created for file {name}."),
            ImportOutcome::Duplicate { .. } => {
                format!("Article already exists with the same title as file {name}.")
            }
            ImportOutcome::Unreadable { reason } => format!("Could not read file {name}: {reason}."),
            ImportOutcome::Failed { reason } => {
                format!("Could not create article for file {name}: {reason}.")
            }
        }
    }
}

/// Per-file outcomes of one batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub files: Vec<FileReport>,
}

impl ImportReport {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| !f.outcome.is_success()).count()
    }

    #[must_use]
    pub fn created(&self) -> usize {
        self.total() - self.failed()
    }

    /// Aggregate line for the batch.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.failed(), self.total()) {
            (0, 1) => "Import successful.".to_string(),
            (0, _) => "All imports successful.".to_string(),
            (failed, total) => format!("{failed} out of {total} imports failed."),
        }
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            writeln!(f, "{}", file.message())?;
        }
        f.write_str(&self.summary())
    }
}

/// Creates draft articles from files. Borrow one per batch.
pub struct Importer<'a> {
    service: &'a FolioService,
}

impl<'a> Importer<'a> {
    #[must_use]
    pub const fn new(service: &'a FolioService) -> Self {
        Self { service }
    }

    /// Import one uploaded file from its name and raw bytes.
    pub async fn import_bytes(&self, file_name: &str, bytes: &[u8]) -> FileReport {
        let outcome = match std::str::from_utf8(bytes) {
            Ok(source) => self.create(file_name, source).await,
            Err(e) => ImportOutcome::Unreadable {
                reason: format!("not valid UTF-8 ({e})"),
            },
        };
        Self::report(file_name, outcome)
    }

    /// Import one file from disk.
    pub async fn import_file(&self, path: &Path) -> FileReport {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        match tokio::fs::read(path).await {
            Ok(bytes) => self.import_bytes(&file_name, &bytes).await,
            Err(e) => Self::report(
                &file_name,
                ImportOutcome::Unreadable {
                    reason: e.to_string(),
                },
            ),
        }
    }

    /// Import every path. Directories contribute their regular files, in
    /// name order, without descending further.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::NoFiles`] when nothing is left to import, or
    /// [`ImportError::ReadDir`] when a directory cannot be listed.
    pub async fn import_paths(&self, paths: &[PathBuf]) -> Result<ImportReport, ImportError> {
        let files = expand(paths).await?;
        if files.is_empty() {
            return Err(ImportError::NoFiles);
        }
        let mut report = ImportReport::default();
        for file in &files {
            report.files.push(self.import_file(file).await);
        }
        tracing::info!(
            total = report.total(),
            failed = report.failed(),
            "import finished"
        );
        Ok(report)
    }

    async fn create(&self, file_name: &str, source: &str) -> ImportOutcome {
        let extracted = extract(file_name, source, SourceFormat::from_file_name(file_name));
        match self.service.title_taken(&extracted.title).await {
            Ok(true) => {
                return ImportOutcome::Duplicate {
                    title: extracted.title,
                };
            }
            Ok(false) => {}
            Err(e) => {
                return ImportOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        }

        let mut draft = ArticleDraft::new(extracted.title, extracted.content);
        draft.status = ArticleStatus::Draft;
        match self.service.create_article(draft).await {
            Ok(article) => ImportOutcome::Created {
                article_id: article.id,
            },
            Err(e) => ImportOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    fn report(file_name: &str, outcome: ImportOutcome) -> FileReport {
        let report = FileReport {
            file_name: file_name.to_string(),
            outcome,
        };
        if report.outcome.is_success() {
            tracing::debug!(file = file_name, "imported");
        } else {
            tracing::warn!(file = file_name, message = %report.message(), "import skipped");
        }
        report
    }
}

async fn expand(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ImportError> {
    let mut files = Vec::new();
    for path in paths {
        if !tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir()) {
            files.push(path.clone());
            continue;
        }
        let read_err = |source| ImportError::ReadDir {
            path: path.clone(),
            source,
        };
        let mut entries = tokio::fs::read_dir(path).await.map_err(read_err)?;
        let mut found = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            if entry.file_type().await.is_ok_and(|t| t.is_file()) {
                found.push(entry.path());
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn report(outcomes: Vec<ImportOutcome>) -> ImportReport {
        ImportReport {
            files: outcomes
                .into_iter()
                .enumerate()
                .map(|(i, outcome)| FileReport {
                    file_name: format!("f{i}.md"),
                    outcome,
                })
                .collect(),
        }
    }

    #[test]
    fn summary_wording() {
        let created = || ImportOutcome::Created {
            article_id: "art-1".into(),
        };
        assert_eq!(report(vec![created()]).summary(), "Import successful.");
        assert_eq!(report(vec![created(), created()]).summary(), "All imports successful.");
        let mixed = report(vec![
            created(),
            ImportOutcome::Duplicate { title: "X".into() },
        ]);
        assert_eq!(mixed.summary(), "1 out of 2 imports failed.");
        assert_eq!(mixed.created(), 1);
    }

    #[test]
    fn messages_name_the_file() {
        let r = FileReport {
            file_name: "faq.md".into(),
            outcome: ImportOutcome::Duplicate { title: "FAQ".into() },
        };
        assert_eq!(r.message(), "Article already exists with the same title as file faq.md.");
    }
}
