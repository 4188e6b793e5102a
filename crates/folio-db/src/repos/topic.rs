//! Topic repository: the topic forest and topic metadata.

use chrono::Utc;

use folio_core::entities::Topic;
use folio_core::ids::PREFIX_TOPIC;
use folio_core::meta::{Actor, MetaWriteOutcome, TopicMeta};
use folio_markup::slugify;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::FolioService;
use crate::updates::topic::TopicUpdate;

const TOPIC_COLUMNS: &str =
    "id, slug, name, description, parent_id, menu_id, parent_page_id, created_at";

fn row_to_topic(row: &libsql::Row) -> Result<Topic, DatabaseError> {
    Ok(Topic {
        id: row.get::<String>(0)?,
        slug: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        description: get_opt_string(row, 3)?,
        parent_id: get_opt_string(row, 4)?,
        menu_id: get_opt_string(row, 5)?,
        parent_page_id: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl FolioService {
    pub async fn create_topic(
        &self,
        name: &str,
        parent_id: Option<&str>,
        description: Option<&str>,
    ) -> Result<Topic, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::Validation("topic name is empty".into()));
        }
        if let Some(parent) = parent_id
            && !self.db().exists("topics", parent).await?
        {
            return Err(DatabaseError::Validation(format!("unknown parent topic {parent}")));
        }
        let slug = slugify(name);
        if self.find_topic_by_slug(&slug).await?.is_some() {
            return Err(DatabaseError::Validation(format!("topic slug '{slug}' already exists")));
        }

        let id = self.db().generate_id(PREFIX_TOPIC).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO topics (id, slug, name, description, parent_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    slug.as_str(),
                    name,
                    description,
                    parent_id,
                    Utc::now().to_rfc3339()
                ],
            )
            .await?;
        self.get_topic(&id).await
    }

    async fn query_topics(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Topic>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;
        let mut topics = Vec::new();
        while let Some(row) = rows.next().await? {
            topics.push(row_to_topic(&row)?);
        }
        Ok(topics)
    }

    pub async fn find_topic(&self, id: &str) -> Result<Option<Topic>, DatabaseError> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = ?1");
        Ok(self.query_topics(&sql, vec![id.into()]).await?.into_iter().next())
    }

    pub async fn get_topic(&self, id: &str) -> Result<Topic, DatabaseError> {
        self.find_topic(id).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn find_topic_by_slug(&self, slug: &str) -> Result<Option<Topic>, DatabaseError> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE slug = ?1");
        Ok(self.query_topics(&sql, vec![slug.into()]).await?.into_iter().next())
    }

    /// All topics ordered by name.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, DatabaseError> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics ORDER BY name COLLATE NOCASE, id");
        self.query_topics(&sql, Vec::new()).await
    }

    /// Topics assigned to an article, in assignment order.
    pub async fn topics_for_article(&self, article_id: &str) -> Result<Vec<Topic>, DatabaseError> {
        let sql = "SELECT t.id, t.slug, t.name, t.description, t.parent_id, t.menu_id, t.parent_page_id, t.created_at
                   FROM article_topics link
                   JOIN topics t ON t.id = link.topic_id
                   WHERE link.article_id = ?1
                   ORDER BY link.position, link.rowid";
        self.query_topics(sql, vec![article_id.into()]).await
    }

    /// Whether `candidate` is `topic_id` or one of its descendants. Stops if
    /// stored parent links loop.
    async fn is_self_or_descendant(
        &self,
        topic_id: &str,
        candidate: &str,
    ) -> Result<bool, DatabaseError> {
        let mut seen = std::collections::HashSet::new();
        let mut cursor = Some(candidate.to_string());
        while let Some(current) = cursor {
            if current == topic_id {
                return Ok(true);
            }
            if !seen.insert(current.clone()) {
                return Ok(false);
            }
            cursor = self.find_topic(&current).await?.and_then(|t| t.parent_id);
        }
        Ok(false)
    }

    pub async fn update_topic(&self, id: &str, update: TopicUpdate) -> Result<Topic, DatabaseError> {
        let existing = self.get_topic(id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(name) = &update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(DatabaseError::Validation("topic name is empty".into()));
            }
            sets.push(format!("name = ?{idx}"));
            params.push(name.into());
            idx += 1;
        }
        if let Some(description) = &update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.as_deref().into());
            idx += 1;
        }
        if let Some(parent) = &update.parent_id {
            if let Some(parent) = parent {
                if !self.db().exists("topics", parent).await? {
                    return Err(DatabaseError::Validation(format!("unknown parent topic {parent}")));
                }
                if self.is_self_or_descendant(id, parent).await? {
                    return Err(DatabaseError::Validation(format!(
                        "topic {parent} cannot be the parent of its own ancestor {id}"
                    )));
                }
            }
            sets.push(format!("parent_id = ?{idx}"));
            params.push(parent.as_deref().into());
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(existing);
        }
        params.push(id.into());
        let sql = format!("UPDATE topics SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_topic(id).await
    }

    /// Write topic metadata on behalf of `actor`.
    pub async fn write_topic_meta(
        &self,
        actor: &Actor,
        topic_id: &str,
        meta: TopicMeta,
    ) -> Result<MetaWriteOutcome, DatabaseError> {
        if !self.db().exists("topics", topic_id).await? {
            return Err(DatabaseError::NoResult);
        }
        let (meta, outcome) = meta.permitted(actor);
        for field in &outcome.skipped {
            tracing::debug!(%field, role = %actor.role, topic_id, "metadata field skipped");
        }

        if let Some(Some(menu_id)) = &meta.menu
            && !self.db().exists("menus", menu_id).await?
        {
            return Err(DatabaseError::Validation(format!("unknown menu {menu_id}")));
        }
        if let Some(Some(page_id)) = &meta.parent_page
            && !self.db().exists("articles", page_id).await?
        {
            return Err(DatabaseError::Validation(format!("unknown parent page {page_id}")));
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;
        if let Some(menu) = &meta.menu {
            sets.push(format!("menu_id = ?{idx}"));
            params.push(menu.as_deref().into());
            idx += 1;
        }
        if let Some(page) = &meta.parent_page {
            sets.push(format!("parent_page_id = ?{idx}"));
            params.push(page.as_deref().into());
            idx += 1;
        }
        if sets.is_empty() {
            return Ok(outcome);
        }
        params.push(topic_id.into());
        let sql = format!("UPDATE topics SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::entities::ArticleDraft;
    use folio_core::enums::Role;
    use folio_core::meta::MetaField;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::topic::TopicUpdateBuilder;

    #[tokio::test]
    async fn topics_nest_and_list() {
        let svc = test_service().await;
        let accounts = svc.create_topic("Accounts", None, None).await.unwrap();
        let billing = svc
            .create_topic("Billing", Some(&accounts.id), Some("Invoices and plans"))
            .await
            .unwrap();
        assert_eq!(billing.slug, "billing");
        assert_eq!(billing.parent_id.as_deref(), Some(accounts.id.as_str()));

        let names: Vec<_> = svc.list_topics().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Accounts", "Billing"]);
    }

    #[tokio::test]
    async fn assignment_order_is_preserved() {
        let svc = test_service().await;
        let b = svc.create_topic("Beta", None, None).await.unwrap();
        let a = svc.create_topic("Alpha", None, None).await.unwrap();
        let mut draft = ArticleDraft::new("Doc", "");
        draft.topic_ids = vec![b.id.clone(), a.id.clone()];
        let article = svc.create_article(draft).await.unwrap();
        assert_eq!(article.topic_ids, vec![b.id.clone(), a.id.clone()]);

        let topics = svc.topics_for_article(&article.id).await.unwrap();
        assert_eq!(topics.iter().map(|t| t.id.clone()).collect::<Vec<_>>(), vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn reparenting_under_descendant_is_rejected() {
        let svc = test_service().await;
        let root = svc.create_topic("Root", None, None).await.unwrap();
        let child = svc.create_topic("Child", Some(&root.id), None).await.unwrap();

        let err = svc
            .update_topic(&root.id, TopicUpdateBuilder::new().parent_id(Some(child.id.clone())).build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let err = svc
            .update_topic(&root.id, TopicUpdateBuilder::new().parent_id(Some(root.id.clone())).build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn topic_meta_needs_editor() {
        let svc = test_service().await;
        let topic = svc.create_topic("Guides", None, None).await.unwrap();
        let menu = svc.create_menu("Guides menu").await.unwrap();
        let meta = TopicMeta {
            menu: Some(Some(menu.id.clone())),
            parent_page: None,
        };

        let outcome = svc
            .write_topic_meta(&Actor::new(Role::Author), &topic.id, meta.clone())
            .await
            .unwrap();
        assert_eq!(outcome.skipped, vec![MetaField::TopicMenu]);
        assert_eq!(svc.get_topic(&topic.id).await.unwrap().menu_id, None);

        svc.write_topic_meta(&Actor::new(Role::Editor), &topic.id, meta)
            .await
            .unwrap();
        assert_eq!(svc.get_topic(&topic.id).await.unwrap().menu_id, Some(menu.id));
    }
}
