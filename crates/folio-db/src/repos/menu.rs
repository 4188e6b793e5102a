//! Menu repository: menus, ordered items, site-wide locations, menu metadata.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use folio_core::entities::{Menu, MenuItem, MenuTarget};
use folio_core::ids::{PREFIX_MENU, PREFIX_MENU_ITEM};
use folio_core::meta::{Actor, MenuMeta, MetaWriteOutcome};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::FolioService;

const ITEM_COLUMNS: &str = "id, menu_id, parent_item_id, position, title, target_kind, \
     target_article_id, target_url, attr_title, link_target, rel, css_class";

fn row_to_menu(row: &libsql::Row) -> Result<Menu, DatabaseError> {
    Ok(Menu {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        parent_page_id: get_opt_string(row, 2)?,
        items: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

fn row_to_item(row: &libsql::Row) -> Result<MenuItem, DatabaseError> {
    let kind = row.get::<String>(5)?;
    let target = match kind.as_str() {
        "article" => MenuTarget::Article {
            article_id: get_opt_string(row, 6)?.ok_or_else(|| {
                DatabaseError::Query("article menu item without target_article_id".into())
            })?,
        },
        "url" => MenuTarget::Url {
            url: get_opt_string(row, 7)?.unwrap_or_default(),
        },
        "placeholder" => MenuTarget::Placeholder,
        other => return Err(DatabaseError::Query(format!("unknown target_kind '{other}'"))),
    };
    Ok(MenuItem {
        id: row.get::<String>(0)?,
        menu_id: row.get::<String>(1)?,
        parent_item_id: get_opt_string(row, 2)?,
        position: u32::try_from(row.get::<i64>(3)?)
            .map_err(|e| DatabaseError::Query(format!("bad menu item position: {e}")))?,
        title: row.get::<String>(4)?,
        target,
        attr_title: get_opt_string(row, 8)?,
        link_target: get_opt_string(row, 9)?,
        rel: get_opt_string(row, 10)?,
        css_class: get_opt_string(row, 11)?,
    })
}

/// Input for [`FolioService::add_menu_item`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub menu_id: String,
    /// Display title. Blank titles on article items fall back to the
    /// article's title.
    pub title: String,
    pub target: MenuTarget,
    pub parent_item_id: Option<String>,
    /// Explicit position; appended after the last item when absent.
    pub position: Option<u32>,
    pub attr_title: Option<String>,
    pub link_target: Option<String>,
    pub rel: Option<String>,
    pub css_class: Option<String>,
}

impl NewMenuItem {
    #[must_use]
    pub fn new(menu_id: impl Into<String>, title: impl Into<String>, target: MenuTarget) -> Self {
        Self {
            menu_id: menu_id.into(),
            title: title.into(),
            target,
            parent_item_id: None,
            position: None,
            attr_title: None,
            link_target: None,
            rel: None,
            css_class: None,
        }
    }
}

impl FolioService {
    pub async fn create_menu(&self, name: &str) -> Result<Menu, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::Validation("menu name is empty".into()));
        }
        let id = self.db().generate_id(PREFIX_MENU).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO menus (id, name, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), name, Utc::now().to_rfc3339()],
            )
            .await?;
        self.get_menu(&id).await
    }

    /// Load a menu with its items ordered by position.
    pub async fn find_menu(&self, id: &str) -> Result<Option<Menu>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, parent_page_id, created_at FROM menus WHERE id = ?1",
                [id],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let mut menu = row_to_menu(&row)?;
        menu.items = self.menu_items(id).await?;
        Ok(Some(menu))
    }

    pub async fn get_menu(&self, id: &str) -> Result<Menu, DatabaseError> {
        self.find_menu(id).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn menu_items(&self, menu_id: &str) -> Result<Vec<MenuItem>, DatabaseError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM menu_items WHERE menu_id = ?1 ORDER BY position, rowid"
        );
        let mut rows = self.db().conn().query(&sql, [menu_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    /// All menus with their items, ordered by name.
    pub async fn list_menus(&self) -> Result<Vec<Menu>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, parent_page_id, created_at FROM menus ORDER BY name COLLATE NOCASE, id",
                (),
            )
            .await?;
        let mut menus = Vec::new();
        while let Some(row) = rows.next().await? {
            menus.push(row_to_menu(&row)?);
        }
        for menu in &mut menus {
            menu.items = self.menu_items(&menu.id).await?;
        }
        Ok(menus)
    }

    pub async fn add_menu_item(&self, item: NewMenuItem) -> Result<MenuItem, DatabaseError> {
        if !self.db().exists("menus", &item.menu_id).await? {
            return Err(DatabaseError::Validation(format!("unknown menu {}", item.menu_id)));
        }
        if let Some(parent) = &item.parent_item_id {
            let siblings = self.menu_items(&item.menu_id).await?;
            if !siblings.iter().any(|i| &i.id == parent) {
                return Err(DatabaseError::Validation(format!(
                    "parent item {parent} is not in menu {}",
                    item.menu_id
                )));
            }
        }

        let mut title = item.title.trim().to_string();
        let (kind, article_id, url) = match &item.target {
            MenuTarget::Article { article_id } => {
                let article = self.find_article(article_id).await?.ok_or_else(|| {
                    DatabaseError::Validation(format!("unknown article {article_id}"))
                })?;
                if title.is_empty() {
                    title = article.title;
                }
                ("article", Some(article_id.as_str()), None)
            }
            MenuTarget::Url { url } => ("url", None, Some(url.as_str())),
            MenuTarget::Placeholder => ("placeholder", None, None),
        };

        let position = match item.position {
            Some(p) => i64::from(p),
            None => {
                let mut rows = self
                    .db()
                    .conn()
                    .query(
                        "SELECT COALESCE(MAX(position) + 1, 0) FROM menu_items WHERE menu_id = ?1",
                        [item.menu_id.as_str()],
                    )
                    .await?;
                let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
                row.get::<i64>(0)?
            }
        };

        let id = self.db().generate_id(PREFIX_MENU_ITEM).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO menu_items (id, menu_id, parent_item_id, position, title, target_kind,
                     target_article_id, target_url, attr_title, link_target, rel, css_class)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                libsql::params![
                    id.as_str(),
                    item.menu_id.as_str(),
                    item.parent_item_id.as_deref(),
                    position,
                    title.as_str(),
                    kind,
                    article_id,
                    url,
                    item.attr_title.as_deref(),
                    item.link_target.as_deref(),
                    item.rel.as_deref(),
                    item.css_class.as_deref()
                ],
            )
            .await?;

        self.menu_items(&item.menu_id)
            .await?
            .into_iter()
            .find(|i| i.id == id)
            .ok_or(DatabaseError::NoResult)
    }

    /// Write menu metadata on behalf of `actor`.
    pub async fn write_menu_meta(
        &self,
        actor: &Actor,
        menu_id: &str,
        meta: MenuMeta,
    ) -> Result<MetaWriteOutcome, DatabaseError> {
        if !self.db().exists("menus", menu_id).await? {
            return Err(DatabaseError::NoResult);
        }
        let (meta, outcome) = meta.permitted(actor);
        for field in &outcome.skipped {
            tracing::debug!(%field, role = %actor.role, menu_id, "metadata field skipped");
        }

        if let Some(page) = &meta.parent_page {
            if let Some(page_id) = page
                && !self.db().exists("articles", page_id).await?
            {
                return Err(DatabaseError::Validation(format!("unknown parent page {page_id}")));
            }
            self.db()
                .conn()
                .execute(
                    "UPDATE menus SET parent_page_id = ?1 WHERE id = ?2",
                    libsql::params![page.as_deref(), menu_id],
                )
                .await?;
        }
        Ok(outcome)
    }

    /// Designate `menu_id` for a site-wide location.
    pub async fn set_menu_location(
        &self,
        location: &str,
        menu_id: &str,
    ) -> Result<(), DatabaseError> {
        if !self.db().exists("menus", menu_id).await? {
            return Err(DatabaseError::Validation(format!("unknown menu {menu_id}")));
        }
        self.db()
            .conn()
            .execute(
                "INSERT INTO menu_locations (location, menu_id) VALUES (?1, ?2)
                 ON CONFLICT(location) DO UPDATE SET menu_id = excluded.menu_id",
                libsql::params![location, menu_id],
            )
            .await?;
        Ok(())
    }

    pub async fn clear_menu_location(&self, location: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM menu_locations WHERE location = ?1", [location])
            .await?;
        Ok(())
    }

    /// Menu designated for `location`, if any.
    pub async fn menu_at_location(&self, location: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT menu_id FROM menu_locations WHERE location = ?1",
                [location],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }
}
