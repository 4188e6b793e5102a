use std::fs;

use folio_core::enums::ArticleStatus;
use folio_db::service::FolioService;
use folio_hooks::HookRegistry;
use folio_import::{ImportError, ImportOutcome, Importer};
use pretty_assertions::assert_eq;

async fn service() -> FolioService {
    FolioService::in_memory(HookRegistry::new()).await.unwrap()
}

#[tokio::test]
async fn directory_batch_reports_each_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a_intro.md"), "# Introduction\n\nHello.\n").unwrap();
    fs::write(
        dir.path().join("b_page.html"),
        "<html><body><main><h1>Setup</h1><p>Steps</p></main></body></html>",
    )
    .unwrap();
    fs::write(dir.path().join("c_binary.txt"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("introduction.txt"), "same title as the markdown").unwrap();

    let svc = service().await;
    let report = Importer::new(&svc)
        .import_paths(&[dir.path().to_path_buf()])
        .await
        .unwrap();

    assert_eq!(report.total(), 4);
    assert_eq!(report.created(), 2);
    assert_eq!(report.summary(), "2 out of 4 imports failed.");
    assert!(matches!(report.files[0].outcome, ImportOutcome::Created { .. }));
    assert!(matches!(report.files[1].outcome, ImportOutcome::Created { .. }));
    assert!(matches!(report.files[2].outcome, ImportOutcome::Unreadable { .. }));
    assert_eq!(
        report.files[3].outcome,
        ImportOutcome::Duplicate {
            title: "Introduction".into()
        }
    );

    let intro = svc.find_article_by_slug("introduction").await.unwrap().unwrap();
    assert_eq!(intro.status, ArticleStatus::Draft);
    assert!(intro.content.contains("<p>Hello.</p>"));
    let setup = svc.find_article_by_slug("setup").await.unwrap().unwrap();
    assert_eq!(setup.content, "<h1>Setup</h1><p>Steps</p>");
}

#[tokio::test]
async fn same_title_twice_is_a_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("release_notes.txt");
    fs::write(&path, "v1").unwrap();

    let svc = service().await;
    let importer = Importer::new(&svc);
    let first = importer.import_file(&path).await;
    let second = importer.import_file(&path).await;

    assert!(first.outcome.is_success());
    assert_eq!(
        second.outcome,
        ImportOutcome::Duplicate {
            title: "Release Notes".into()
        }
    );
}

#[tokio::test]
async fn missing_file_is_unreadable() {
    let svc = service().await;
    let report = Importer::new(&svc)
        .import_file(std::path::Path::new("/nonexistent/folio/missing.md"))
        .await;
    assert!(matches!(report.outcome, ImportOutcome::Unreadable { .. }));
    assert_eq!(report.file_name, "missing.md");
}

#[tokio::test]
async fn empty_batch_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service().await;
    let err = Importer::new(&svc)
        .import_paths(&[dir.path().to_path_buf()])
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::NoFiles));
}
