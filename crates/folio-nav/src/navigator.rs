//! Per-request navigation context.
//!
//! A [`Navigator`] answers "which sidebar menu applies to this article" and
//! everything derived from it (prev/next items, the parent page, the links
//! to render). Resolutions and loaded menus are memoized for the lifetime of
//! the navigator, so create one per rendering pass and drop it afterwards.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use folio_config::SiteConfig;
use folio_core::entities::{Article, Menu, MenuItem, MenuLocation, MenuTarget, StateSet, Topic};
use folio_db::service::FolioService;

use crate::adjacent::{Direction, adjacent_item};
use crate::error::NavError;
use crate::render::MenuLink;

/// Where a resolved menu came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "topic_id", rename_all = "snake_case")]
pub enum MenuSource {
    /// Assigned to the article itself.
    Article,
    /// Assigned to one of the article's topics.
    Topic(String),
    /// Inherited from an ancestor of one of the article's topics.
    Ancestor(String),
    /// The site-wide default location.
    DefaultLocation,
}

impl MenuSource {
    /// The topic the menu was reached through, if any.
    #[must_use]
    pub fn topic_id(&self) -> Option<&str> {
        match self {
            Self::Topic(id) | Self::Ancestor(id) => Some(id),
            Self::Article | Self::DefaultLocation => None,
        }
    }
}

impl fmt::Display for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => f.write_str("article"),
            Self::Topic(id) => write!(f, "topic {id}"),
            Self::Ancestor(id) => write!(f, "ancestor topic {id}"),
            Self::DefaultLocation => f.write_str("default location"),
        }
    }
}

/// The menu that applies to an article.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedMenu {
    pub menu_id: String,
    pub source: MenuSource,
}

/// Topic breadcrumbs for an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breadcrumbs {
    /// Root ancestor of the first assigned topic that has one.
    pub generic: Option<Topic>,
    /// The most deeply nested assigned topic.
    pub specific: Option<Topic>,
}

pub struct Navigator<'a> {
    service: &'a FolioService,
    resolved: HashMap<String, Option<ResolvedMenu>>,
    menus: HashMap<String, Menu>,
}

impl<'a> Navigator<'a> {
    #[must_use]
    pub fn new(service: &'a FolioService) -> Self {
        Self {
            service,
            resolved: HashMap::new(),
            menus: HashMap::new(),
        }
    }

    /// Resolve the sidebar menu for `article`.
    ///
    /// First match wins: the article's own menu, then for each assigned
    /// topic in order its own menu followed by its ancestors' nearest first,
    /// then the default location. A topic whose ancestry loops is skipped.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn resolve(&mut self, article: &Article) -> Result<Option<ResolvedMenu>, NavError> {
        if let Some(hit) = self.resolved.get(&article.id) {
            return Ok(hit.clone());
        }
        let resolved = self.resolve_uncached(article).await?;
        match &resolved {
            Some(r) => tracing::debug!(article_id = %article.id, menu_id = %r.menu_id, source = %r.source, "menu resolved"),
            None => tracing::debug!(article_id = %article.id, "no sidebar menu"),
        }
        self.resolved.insert(article.id.clone(), resolved.clone());
        Ok(resolved)
    }

    async fn resolve_uncached(
        &mut self,
        article: &Article,
    ) -> Result<Option<ResolvedMenu>, NavError> {
        if let Some(menu_id) = &article.menu_id
            && self.load_menu(menu_id).await?.is_some()
        {
            return Ok(Some(ResolvedMenu {
                menu_id: menu_id.clone(),
                source: MenuSource::Article,
            }));
        }

        for topic in self.service.topics_for_article(&article.id).await? {
            if let Some(menu_id) = &topic.menu_id
                && self.load_menu(menu_id).await?.is_some()
            {
                return Ok(Some(ResolvedMenu {
                    menu_id: menu_id.clone(),
                    source: MenuSource::Topic(topic.id),
                }));
            }
            let Some(ancestors) = self.ancestors(&topic).await? else {
                tracing::debug!(topic_id = %topic.id, "topic ancestry loops, skipping topic");
                continue;
            };
            for ancestor in ancestors {
                if let Some(menu_id) = &ancestor.menu_id
                    && self.load_menu(menu_id).await?.is_some()
                {
                    return Ok(Some(ResolvedMenu {
                        menu_id: menu_id.clone(),
                        source: MenuSource::Ancestor(ancestor.id),
                    }));
                }
            }
        }

        if let Some(menu_id) = self.service.menu_at_location(MenuLocation::DEFAULT).await?
            && self.load_menu(&menu_id).await?.is_some()
        {
            return Ok(Some(ResolvedMenu {
                menu_id,
                source: MenuSource::DefaultLocation,
            }));
        }
        Ok(None)
    }

    async fn load_menu(&mut self, menu_id: &str) -> Result<Option<&Menu>, NavError> {
        if !self.menus.contains_key(menu_id) {
            let Some(menu) = self.service.find_menu(menu_id).await? else {
                return Ok(None);
            };
            self.menus.insert(menu_id.to_string(), menu);
        }
        Ok(self.menus.get(menu_id))
    }

    /// The resolved menu with its items.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn menu(&mut self, article: &Article) -> Result<Option<Menu>, NavError> {
        let Some(resolved) = self.resolve(article).await? else {
            return Ok(None);
        };
        Ok(self.load_menu(&resolved.menu_id).await?.cloned())
    }

    /// Ancestors of `topic`, nearest first. `None` when the parent chain
    /// loops back on itself.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn ancestors(&self, topic: &Topic) -> Result<Option<Vec<Topic>>, NavError> {
        let mut seen = HashSet::from([topic.id.clone()]);
        let mut chain = Vec::new();
        let mut parent = topic.parent_id.clone();
        while let Some(ref id) = parent {
            if !seen.insert(id.clone()) {
                return Ok(None);
            }
            let Some(next) = self.service.find_topic(id).await? else {
                break;
            };
            parent.clone_from(&next.parent_id);
            chain.push(next);
        }
        Ok(Some(chain))
    }

    /// The nearest real destination before or after `article` in its menu.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn adjacent(
        &mut self,
        article: &Article,
        direction: Direction,
    ) -> Result<Option<MenuItem>, NavError> {
        let Some(menu) = self.menu(article).await? else {
            return Ok(None);
        };
        Ok(adjacent_item(&menu.items, &article.id, direction).cloned())
    }

    pub async fn previous(&mut self, article: &Article) -> Result<Option<MenuItem>, NavError> {
        self.adjacent(article, Direction::Prev).await
    }

    pub async fn next(&mut self, article: &Article) -> Result<Option<MenuItem>, NavError> {
        self.adjacent(article, Direction::Next).await
    }

    /// The page linked above the sidebar.
    ///
    /// When the menu was reached through a topic carrying a parent page,
    /// that page wins over the menu's own.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn sidebar_parent(&mut self, article: &Article) -> Result<Option<Article>, NavError> {
        let Some(resolved) = self.resolve(article).await? else {
            return Ok(None);
        };
        let topic_page = match resolved.source.topic_id() {
            Some(topic_id) => self
                .service
                .find_topic(topic_id)
                .await?
                .and_then(|t| t.parent_page_id),
            None => None,
        };
        let page_id = match topic_page {
            Some(id) => Some(id),
            None => self
                .load_menu(&resolved.menu_id)
                .await?
                .and_then(|m| m.parent_page_id.clone()),
        };
        match page_id {
            Some(id) => Ok(self.service.find_article(&id).await?),
            None => Ok(None),
        }
    }

    /// Resolve URLs and target states for rendering `item`.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn link(&self, item: &MenuItem, site: &SiteConfig) -> Result<MenuLink, NavError> {
        let (href, states) = match &item.target {
            MenuTarget::Article { article_id } => match self.service.find_article(article_id).await? {
                Some(article) => (Some(site.article_url(&article.slug)), article.states),
                None => (None, StateSet::new()),
            },
            MenuTarget::Url { url } if !url.trim().is_empty() => (Some(url.clone()), StateSet::new()),
            MenuTarget::Url { .. } | MenuTarget::Placeholder => (None, StateSet::new()),
        };
        Ok(MenuLink {
            item: item.clone(),
            href,
            states,
        })
    }

    /// Renderable links for every item of `menu`, in order.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn links(&self, menu: &Menu, site: &SiteConfig) -> Result<Vec<MenuLink>, NavError> {
        let mut links = Vec::with_capacity(menu.items.len());
        for item in &menu.items {
            links.push(self.link(item, site).await?);
        }
        Ok(links)
    }

    /// Topic breadcrumbs for `article`.
    ///
    /// Topics are considered newest first (creation time, then ID), so among
    /// equally deep topics the most recently created is the specific one.
    ///
    /// # Errors
    ///
    /// Returns `NavError` only when the store fails.
    pub async fn breadcrumbs(&self, article: &Article) -> Result<Breadcrumbs, NavError> {
        let mut topics = self.service.topics_for_article(&article.id).await?;
        topics.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        let mut crumbs = Breadcrumbs::default();
        let mut deepest: Option<usize> = None;
        for topic in topics {
            let ancestors = self.ancestors(&topic).await?.unwrap_or_default();
            if crumbs.generic.is_none() {
                crumbs.generic = ancestors.last().cloned();
            }
            if deepest.is_none_or(|d| ancestors.len() > d) {
                deepest = Some(ancestors.len());
                crumbs.specific = Some(topic);
            }
        }
        Ok(crumbs)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::entities::ArticleDraft;
    use folio_core::enums::ArticleStatus;
    use folio_db::repos::NewMenuItem;
    use folio_hooks::HookRegistry;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn service() -> FolioService {
        FolioService::in_memory(HookRegistry::new()).await.unwrap()
    }

    async fn article(svc: &FolioService, title: &str, topics: &[&Topic]) -> Article {
        let mut draft = ArticleDraft::new(title, "");
        draft.status = ArticleStatus::Publish;
        draft.topic_ids = topics.iter().map(|t| t.id.clone()).collect();
        svc.create_article(draft).await.unwrap()
    }

    async fn assign_menu(svc: &FolioService, topic: &Topic, menu: &Menu) {
        svc.db()
            .conn()
            .execute(
                "UPDATE topics SET menu_id = ?1 WHERE id = ?2",
                [menu.id.as_str(), topic.id.as_str()],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn own_menu_beats_topic_menu() {
        let svc = service().await;
        let topic_menu = svc.create_menu("Topic").await.unwrap();
        let own_menu = svc.create_menu("Own").await.unwrap();
        let topic = svc.create_topic("Guides", None, None).await.unwrap();
        assign_menu(&svc, &topic, &topic_menu).await;

        let mut draft = ArticleDraft::new("Doc", "");
        draft.topic_ids = vec![topic.id.clone()];
        draft.menu_id = Some(own_menu.id.clone());
        let doc = svc.create_article(draft).await.unwrap();

        let mut nav = Navigator::new(&svc);
        let resolved = nav.resolve(&doc).await.unwrap().unwrap();
        assert_eq!(resolved.menu_id, own_menu.id);
        assert_eq!(resolved.source, MenuSource::Article);
    }

    #[tokio::test]
    async fn resolution_is_memoized_within_a_request() {
        let svc = service().await;
        let first = svc.create_menu("First").await.unwrap();
        let second = svc.create_menu("Second").await.unwrap();
        svc.set_menu_location(MenuLocation::DEFAULT, &first.id).await.unwrap();
        let doc = article(&svc, "Doc", &[]).await;

        let mut nav = Navigator::new(&svc);
        let before = nav.resolve(&doc).await.unwrap();
        svc.set_menu_location(MenuLocation::DEFAULT, &second.id).await.unwrap();
        assert_eq!(nav.resolve(&doc).await.unwrap(), before);

        let mut fresh = Navigator::new(&svc);
        assert_eq!(fresh.resolve(&doc).await.unwrap().unwrap().menu_id, second.id);
    }

    #[tokio::test]
    async fn nothing_resolves_without_any_menu() {
        let svc = service().await;
        let doc = article(&svc, "Lonely", &[]).await;
        let mut nav = Navigator::new(&svc);
        assert_eq!(nav.resolve(&doc).await.unwrap(), None);
        assert_eq!(nav.next(&doc).await.unwrap(), None);
        assert_eq!(nav.sidebar_parent(&doc).await.unwrap(), None);
    }

    #[tokio::test]
    async fn topic_parent_page_overrides_menu_parent() {
        let svc = service().await;
        let menu_page = article(&svc, "Menu home", &[]).await;
        let topic_page = article(&svc, "Topic home", &[]).await;
        let menu = svc.create_menu("Docs").await.unwrap();
        svc.db()
            .conn()
            .execute(
                "UPDATE menus SET parent_page_id = ?1 WHERE id = ?2",
                [menu_page.id.as_str(), menu.id.as_str()],
            )
            .await
            .unwrap();
        let plain = svc.create_topic("Plain", None, None).await.unwrap();
        let custom = svc.create_topic("Custom", None, None).await.unwrap();
        assign_menu(&svc, &plain, &menu).await;
        assign_menu(&svc, &custom, &menu).await;
        svc.db()
            .conn()
            .execute(
                "UPDATE topics SET parent_page_id = ?1 WHERE id = ?2",
                [topic_page.id.as_str(), custom.id.as_str()],
            )
            .await
            .unwrap();

        let a = article(&svc, "A", &[&plain]).await;
        let b = article(&svc, "B", &[&custom]).await;
        let mut nav = Navigator::new(&svc);
        assert_eq!(nav.sidebar_parent(&a).await.unwrap().map(|p| p.id), Some(menu_page.id));
        assert_eq!(nav.sidebar_parent(&b).await.unwrap().map(|p| p.id), Some(topic_page.id));
    }

    #[tokio::test]
    async fn links_carry_urls_and_states() {
        let svc = service().await;
        let doc = article(&svc, "Setup Guide", &[]).await;
        let menu = svc.create_menu("Docs").await.unwrap();
        svc.add_menu_item(NewMenuItem::new(
            &menu.id,
            "",
            MenuTarget::Article {
                article_id: doc.id.clone(),
            },
        ))
        .await
        .unwrap();
        svc.add_menu_item(NewMenuItem::new(&menu.id, "Group", MenuTarget::Placeholder))
            .await
            .unwrap();
        let menu = svc.get_menu(&menu.id).await.unwrap();

        let nav = Navigator::new(&svc);
        let links = nav.links(&menu, &SiteConfig::default()).await.unwrap();
        assert_eq!(links[0].href.as_deref(), Some("/docs/setup-guide"));
        assert_eq!(links[1].href, None);
    }

    #[tokio::test]
    async fn breadcrumbs_pick_deepest_and_root() {
        let svc = service().await;
        let accounts = svc.create_topic("Accounts", None, None).await.unwrap();
        let billing = svc.create_topic("Billing", Some(&accounts.id), None).await.unwrap();
        let invoices = svc.create_topic("Invoices", Some(&billing.id), None).await.unwrap();
        let misc = svc.create_topic("Misc", None, None).await.unwrap();
        let doc = article(&svc, "Doc", &[&misc, &invoices]).await;

        let crumbs = Navigator::new(&svc).breadcrumbs(&doc).await.unwrap();
        assert_eq!(crumbs.specific.map(|t| t.name), Some("Invoices".to_string()));
        assert_eq!(crumbs.generic.map(|t| t.name), Some("Accounts".to_string()));

        let flat = article(&svc, "Flat", &[&misc]).await;
        let crumbs = Navigator::new(&svc).breadcrumbs(&flat).await.unwrap();
        assert_eq!(crumbs.specific.map(|t| t.name), Some("Misc".to_string()));
        assert_eq!(crumbs.generic, None);
    }
}
