use folio_core::entities::{Article, ArticleDraft, Menu, MenuLocation, MenuTarget, Topic};
use folio_core::enums::ArticleStatus;
use folio_db::repos::NewMenuItem;
use folio_db::service::FolioService;
use folio_hooks::HookRegistry;
use folio_nav::{Direction, MenuSource, Navigator};
use pretty_assertions::assert_eq;

async fn service() -> FolioService {
    FolioService::in_memory(HookRegistry::new()).await.unwrap()
}

async fn doc(svc: &FolioService, title: &str, topics: &[&Topic]) -> Article {
    let mut draft = ArticleDraft::new(title, format!("<p>{title}</p>"));
    draft.status = ArticleStatus::Publish;
    draft.topic_ids = topics.iter().map(|t| t.id.clone()).collect();
    svc.create_article(draft).await.unwrap()
}

async fn set_topic_menu(svc: &FolioService, topic: &Topic, menu: &Menu) {
    svc.db()
        .conn()
        .execute(
            "UPDATE topics SET menu_id = ?1 WHERE id = ?2",
            [menu.id.as_str(), topic.id.as_str()],
        )
        .await
        .unwrap();
}

async fn set_parent(svc: &FolioService, topic: &Topic, parent: &Topic) {
    svc.db()
        .conn()
        .execute(
            "UPDATE topics SET parent_id = ?1 WHERE id = ?2",
            [parent.id.as_str(), topic.id.as_str()],
        )
        .await
        .unwrap();
}

async fn set_created(svc: &FolioService, topic: &Topic, at: &str) {
    svc.db()
        .conn()
        .execute(
            "UPDATE topics SET created_at = ?1 WHERE id = ?2",
            [at, topic.id.as_str()],
        )
        .await
        .unwrap();
}

async fn add_article_item(svc: &FolioService, menu: &Menu, article: &Article) {
    svc.add_menu_item(NewMenuItem::new(
        &menu.id,
        "",
        MenuTarget::Article {
            article_id: article.id.clone(),
        },
    ))
    .await
    .unwrap();
}

#[tokio::test]
async fn billing_inherits_menu_from_accounts() {
    let svc = service().await;
    let accounts = svc.create_topic("Accounts", None, None).await.unwrap();
    let billing = svc
        .create_topic("Billing", Some(&accounts.id), None)
        .await
        .unwrap();
    let menu = svc.create_menu("Account docs").await.unwrap();
    set_topic_menu(&svc, &accounts, &menu).await;
    let article = doc(&svc, "Invoices", &[&billing]).await;

    let mut nav = Navigator::new(&svc);
    let resolved = nav.resolve(&article).await.unwrap().unwrap();
    assert_eq!(resolved.menu_id, menu.id);
    assert_eq!(resolved.source, MenuSource::Ancestor(accounts.id.clone()));
    assert_eq!(nav.resolve(&article).await.unwrap().unwrap(), resolved);
}

#[tokio::test]
async fn earlier_topic_wins_over_later_one() {
    let svc = service().await;
    let first = svc.create_topic("First", None, None).await.unwrap();
    let second = svc.create_topic("Second", None, None).await.unwrap();
    let menu_a = svc.create_menu("A").await.unwrap();
    let menu_b = svc.create_menu("B").await.unwrap();
    set_topic_menu(&svc, &first, &menu_a).await;
    set_topic_menu(&svc, &second, &menu_b).await;

    let article = doc(&svc, "Doc", &[&second, &first]).await;
    let resolved = Navigator::new(&svc).resolve(&article).await.unwrap().unwrap();
    assert_eq!(resolved.menu_id, menu_b.id);
}

#[tokio::test]
async fn cyclic_ancestry_falls_through_to_default() {
    let svc = service().await;
    let a = svc.create_topic("Loop A", None, None).await.unwrap();
    let b = svc.create_topic("Loop B", Some(&a.id), None).await.unwrap();
    // The store refuses cycles, so build one behind its back.
    set_parent(&svc, &a, &b).await;
    let orphan_menu = svc.create_menu("Unreachable").await.unwrap();
    set_topic_menu(&svc, &a, &orphan_menu).await;

    let default = svc.create_menu("Default").await.unwrap();
    svc.set_menu_location(MenuLocation::DEFAULT, &default.id)
        .await
        .unwrap();
    let article = doc(&svc, "Doc", &[&b]).await;

    let resolved = Navigator::new(&svc).resolve(&article).await.unwrap().unwrap();
    assert_eq!(resolved.menu_id, default.id);
    assert_eq!(resolved.source, MenuSource::DefaultLocation);
}

#[tokio::test]
async fn cyclic_topic_is_skipped_for_the_next_one() {
    let svc = service().await;
    let looped = svc.create_topic("Looped", None, None).await.unwrap();
    set_parent(&svc, &looped, &looped).await;
    let healthy = svc.create_topic("Healthy", None, None).await.unwrap();
    let menu = svc.create_menu("Healthy menu").await.unwrap();
    set_topic_menu(&svc, &healthy, &menu).await;

    let article = doc(&svc, "Doc", &[&looped, &healthy]).await;
    let resolved = Navigator::new(&svc).resolve(&article).await.unwrap().unwrap();
    assert_eq!(resolved.source, MenuSource::Topic(healthy.id));
}

#[tokio::test]
async fn prev_and_next_round_trip_across_placeholders() {
    let svc = service().await;
    let menu = svc.create_menu("Guide").await.unwrap();
    svc.set_menu_location(MenuLocation::DEFAULT, &menu.id)
        .await
        .unwrap();

    let intro = doc(&svc, "Intro", &[]).await;
    let setup = doc(&svc, "Setup", &[]).await;
    let usage = doc(&svc, "Usage", &[]).await;

    add_article_item(&svc, &menu, &intro).await;
    add_article_item(&svc, &menu, &setup).await;
    svc.add_menu_item(NewMenuItem::new(&menu.id, "Advanced", MenuTarget::Placeholder))
        .await
        .unwrap();
    svc.add_menu_item(NewMenuItem::new(
        &menu.id,
        "More",
        MenuTarget::Url { url: "#".into() },
    ))
    .await
    .unwrap();
    add_article_item(&svc, &menu, &usage).await;

    let mut nav = Navigator::new(&svc);

    let next = nav.adjacent(&intro, Direction::Next).await.unwrap().unwrap();
    assert_eq!(next.target.article_id(), Some(setup.id.as_str()));
    let back = nav.adjacent(&setup, Direction::Prev).await.unwrap().unwrap();
    assert_eq!(back.target.article_id(), Some(intro.id.as_str()));

    let over = nav.next(&setup).await.unwrap().unwrap();
    assert_eq!(over.target.article_id(), Some(usage.id.as_str()));
    let under = nav.previous(&usage).await.unwrap().unwrap();
    assert_eq!(under.target.article_id(), Some(setup.id.as_str()));

    assert_eq!(nav.previous(&intro).await.unwrap(), None);
    assert_eq!(nav.next(&usage).await.unwrap(), None);
}

#[tokio::test]
async fn deep_chain_resolves_to_the_root_menu() {
    const DEPTH: usize = 64;
    let svc = service().await;
    let root = svc.create_topic("Level 0", None, None).await.unwrap();
    let mut leaf = root.clone();
    for level in 1..DEPTH {
        leaf = svc
            .create_topic(&format!("Level {level}"), Some(&leaf.id), None)
            .await
            .unwrap();
    }
    let menu = svc.create_menu("Root").await.unwrap();
    set_topic_menu(&svc, &root, &menu).await;
    let article = doc(&svc, "Deep", &[&leaf]).await;

    let mut nav = Navigator::new(&svc);
    let resolved = nav.resolve(&article).await.unwrap().unwrap();
    assert_eq!(resolved.menu_id, menu.id);
    assert_eq!(resolved.source, MenuSource::Ancestor(root.id.clone()));

    let ancestors = nav.ancestors(&leaf).await.unwrap().unwrap();
    assert_eq!(ancestors.len(), DEPTH - 1);
    assert_eq!(ancestors.last().map(|t| t.id.as_str()), Some(root.id.as_str()));

    let crumbs = nav.breadcrumbs(&article).await.unwrap();
    assert_eq!(crumbs.generic.map(|t| t.id), Some(root.id));
    assert_eq!(crumbs.specific.map(|t| t.id), Some(leaf.id));
}

#[tokio::test]
async fn equally_deep_topics_prefer_the_newest_as_specific() {
    let svc = service().await;
    let guides = svc.create_topic("Guides", None, None).await.unwrap();
    let older = svc.create_topic("Older", Some(&guides.id), None).await.unwrap();
    let newer = svc.create_topic("Newer", Some(&guides.id), None).await.unwrap();
    set_created(&svc, &older, "2026-01-01T00:00:00+00:00").await;
    set_created(&svc, &newer, "2026-02-01T00:00:00+00:00").await;

    let nav = Navigator::new(&svc);
    for (title, topics) in [("First", [&older, &newer]), ("Second", [&newer, &older])] {
        let article = doc(&svc, title, &topics).await;
        let crumbs = nav.breadcrumbs(&article).await.unwrap();
        assert_eq!(crumbs.specific.map(|t| t.id), Some(newer.id.clone()));
        assert_eq!(crumbs.generic.map(|t| t.id), Some(guides.id.clone()));
    }
}
