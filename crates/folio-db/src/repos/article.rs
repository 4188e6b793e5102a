//! Article repository: CRUD, slugs, topic assignment, typed metadata, FTS.

use chrono::Utc;

use folio_core::entities::{Article, ArticleDraft};
use folio_core::enums::{ArticleStatus, ContentType};
use folio_core::ids::PREFIX_ARTICLE;
use folio_core::meta::{Actor, ArticleMeta, MetaWriteOutcome};
use folio_markup::slugify;

use crate::error::DatabaseError;
use crate::helpers::{
    encode_states, get_count, get_opt_string, parse_datetime, parse_enum, parse_states,
};
use crate::service::FolioService;
use crate::updates::article::ArticleUpdate;

const ARTICLE_COLUMNS: &str = "a.id, a.slug, a.title, a.content, a.content_type, a.status, \
     a.states, a.menu_id, a.helpful, a.unhelpful, a.created_at, a.updated_at";

fn row_to_article(row: &libsql::Row) -> Result<Article, DatabaseError> {
    Ok(Article {
        id: row.get::<String>(0)?,
        slug: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        content: row.get::<String>(3)?,
        content_type: parse_enum(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        states: parse_states(&row.get::<String>(6)?)?,
        menu_id: get_opt_string(row, 7)?,
        helpful: get_count(row, 8)?,
        unhelpful: get_count(row, 9)?,
        topic_ids: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

/// Criteria for [`FolioService::list_articles`].
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub content_type: Option<ContentType>,
    pub topic_id: Option<String>,
    pub limit: u32,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            status: None,
            content_type: Some(ContentType::Documentation),
            topic_id: None,
            limit: 100,
        }
    }
}

impl ArticleFilter {
    /// Published documentation only.
    #[must_use]
    pub fn published(limit: u32) -> Self {
        Self {
            status: Some(ArticleStatus::Publish),
            limit,
            ..Self::default()
        }
    }
}

impl FolioService {
    /// Create an article from a draft.
    ///
    /// `before_save` hooks run first and may rewrite or veto the draft. The
    /// slug is the slugified title (or the draft's explicit slug), suffixed
    /// `-2`, `-3`, ... if already taken.
    pub async fn create_article(&self, mut draft: ArticleDraft) -> Result<Article, DatabaseError> {
        self.hooks().run_before_save(&mut draft)?;
        self.validate_draft(&draft).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ARTICLE).await?;
        let base = draft.slug.as_deref().map_or_else(|| slugify(&draft.title), slugify);
        let slug = self.unique_article_slug(&base, None).await?;
        let states = encode_states(&draft.states)?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO articles (id, slug, title, content, content_type, status, states, menu_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            libsql::params![
                id.as_str(),
                slug.as_str(),
                draft.title.trim(),
                draft.content.as_str(),
                draft.content_type.as_str(),
                draft.status.as_str(),
                states,
                draft.menu_id.as_deref(),
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )
        .await?;
        for (position, topic_id) in draft.topic_ids.iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO article_topics (article_id, topic_id, position) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), topic_id.as_str(), i64::try_from(position).unwrap_or(i64::MAX)],
            )
            .await?;
        }
        tx.commit().await?;

        let article = self.get_article(&id).await?;
        tracing::debug!(id = %article.id, slug = %article.slug, "article created");
        self.hooks().run_after_save(&article);
        Ok(article)
    }

    async fn validate_draft(&self, draft: &ArticleDraft) -> Result<(), DatabaseError> {
        if draft.title.trim().is_empty() {
            return Err(DatabaseError::Validation("article title is empty".into()));
        }
        if let Some(menu_id) = &draft.menu_id
            && !self.db().exists("menus", menu_id).await?
        {
            return Err(DatabaseError::Validation(format!("unknown menu {menu_id}")));
        }
        for topic_id in &draft.topic_ids {
            if !self.db().exists("topics", topic_id).await? {
                return Err(DatabaseError::Validation(format!("unknown topic {topic_id}")));
            }
        }
        if draft.content_type != ContentType::Documentation && !draft.states.is_normal() {
            return Err(DatabaseError::Validation(
                "state flags only apply to documentation articles".into(),
            ));
        }
        Ok(())
    }

    /// First free slug among `base`, `base-2`, `base-3`, ...
    async fn unique_article_slug(
        &self,
        base: &str,
        except_id: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let mut candidate = base.to_string();
        let mut n = 2u32;
        loop {
            let mut rows = self
                .db()
                .conn()
                .query(
                    "SELECT id FROM articles WHERE slug = ?1",
                    [candidate.as_str()],
                )
                .await?;
            match rows.next().await? {
                None => return Ok(candidate),
                Some(row) if except_id == Some(row.get::<String>(0)?.as_str()) => {
                    return Ok(candidate);
                }
                Some(_) => {
                    candidate = format!("{base}-{n}");
                    n += 1;
                }
            }
        }
    }

    /// Whether an article already uses the slug derived from `title`.
    pub async fn title_taken(&self, title: &str) -> Result<bool, DatabaseError> {
        Ok(self.find_article_by_slug(&slugify(title)).await?.is_some())
    }

    async fn load_topic_ids(&self, article: &mut Article) -> Result<(), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT topic_id FROM article_topics WHERE article_id = ?1 ORDER BY position, rowid",
                [article.id.as_str()],
            )
            .await?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        article.topic_ids = ids;
        Ok(())
    }

    async fn query_articles(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Article>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next().await? {
            articles.push(row_to_article(&row)?);
        }
        for article in &mut articles {
            self.load_topic_ids(article).await?;
        }
        Ok(articles)
    }

    /// Look up an article by ID. `None` when it does not exist.
    pub async fn find_article(&self, id: &str) -> Result<Option<Article>, DatabaseError> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = ?1");
        Ok(self
            .query_articles(&sql, vec![id.into()])
            .await?
            .into_iter()
            .next())
    }

    pub async fn get_article(&self, id: &str) -> Result<Article, DatabaseError> {
        self.find_article(id).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn find_article_by_slug(&self, slug: &str) -> Result<Option<Article>, DatabaseError> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = ?1");
        Ok(self
            .query_articles(&sql, vec![slug.into()])
            .await?
            .into_iter()
            .next())
    }

    /// Articles matching `filter`, newest first.
    pub async fn list_articles(&self, filter: &ArticleFilter) -> Result<Vec<Article>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(status) = filter.status {
            clauses.push(format!("a.status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(content_type) = filter.content_type {
            clauses.push(format!("a.content_type = ?{idx}"));
            params.push(content_type.as_str().into());
            idx += 1;
        }
        if let Some(topic_id) = &filter.topic_id {
            clauses.push(format!(
                "EXISTS (SELECT 1 FROM article_topics t WHERE t.article_id = a.id AND t.topic_id = ?{idx})"
            ));
            params.push(topic_id.as_str().into());
            idx += 1;
        }
        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        params.push(i64::from(filter.limit).into());
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a {where_sql}
             ORDER BY a.created_at DESC, a.rowid DESC LIMIT ?{idx}"
        );
        self.query_articles(&sql, params).await
    }

    /// Full-text search over title and body. `fts_query` is an FTS5 MATCH
    /// expression.
    pub async fn search_articles(
        &self,
        fts_query: &str,
        status: Option<ArticleStatus>,
        limit: u32,
    ) -> Result<Vec<Article>, DatabaseError> {
        let status_filter = if status.is_some() { "AND a.status = ?3" } else { "" };
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS}
             FROM articles_fts
             JOIN articles a ON a.rowid = articles_fts.rowid
             WHERE articles_fts MATCH ?1 AND a.content_type = 'documentation' {status_filter}
             ORDER BY rank LIMIT ?2"
        );
        let mut params: Vec<libsql::Value> = vec![fts_query.into(), i64::from(limit).into()];
        if let Some(status) = status {
            params.push(status.as_str().into());
        }
        self.query_articles(&sql, params).await
    }

    /// Apply a partial update. The merged result passes through the
    /// `before_save` hooks like a new draft.
    pub async fn update_article(
        &self,
        id: &str,
        update: ArticleUpdate,
    ) -> Result<Article, DatabaseError> {
        let existing = self.get_article(id).await?;
        if update.is_empty() {
            return Ok(existing);
        }

        let mut draft = ArticleDraft {
            title: update.title.unwrap_or(existing.title),
            slug: update.slug.or(Some(existing.slug)),
            content: update.content.unwrap_or(existing.content),
            content_type: update.content_type.unwrap_or(existing.content_type),
            status: update.status.unwrap_or(existing.status),
            states: existing.states,
            menu_id: existing.menu_id,
            topic_ids: existing.topic_ids,
        };
        self.hooks().run_before_save(&mut draft)?;
        self.validate_draft(&draft).await?;

        let base = draft.slug.as_deref().map_or_else(|| slugify(&draft.title), slugify);
        let slug = self.unique_article_slug(&base, Some(id)).await?;
        self.db()
            .conn()
            .execute(
                "UPDATE articles SET title = ?1, slug = ?2, content = ?3, content_type = ?4, status = ?5, updated_at = ?6
                 WHERE id = ?7",
                libsql::params![
                    draft.title.trim(),
                    slug.as_str(),
                    draft.content.as_str(),
                    draft.content_type.as_str(),
                    draft.status.as_str(),
                    Utc::now().to_rfc3339(),
                    id
                ],
            )
            .await?;

        let article = self.get_article(id).await?;
        self.hooks().run_after_save(&article);
        Ok(article)
    }

    /// Delete an article. Returns whether a row was removed.
    pub async fn delete_article(&self, id: &str) -> Result<bool, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute("DELETE FROM articles WHERE id = ?1", [id])
            .await?;
        Ok(removed > 0)
    }

    /// Replace the article's topic assignments, keeping the given order.
    pub async fn assign_topics(
        &self,
        article_id: &str,
        topic_ids: &[String],
    ) -> Result<Article, DatabaseError> {
        if !self.db().exists("articles", article_id).await? {
            return Err(DatabaseError::NoResult);
        }
        for topic_id in topic_ids {
            if !self.db().exists("topics", topic_id).await? {
                return Err(DatabaseError::Validation(format!("unknown topic {topic_id}")));
            }
        }

        let tx = self.db().conn().transaction().await?;
        tx.execute("DELETE FROM article_topics WHERE article_id = ?1", [article_id])
            .await?;
        for (position, topic_id) in topic_ids.iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO article_topics (article_id, topic_id, position) VALUES (?1, ?2, ?3)",
                libsql::params![article_id, topic_id.as_str(), i64::try_from(position).unwrap_or(i64::MAX)],
            )
            .await?;
        }
        tx.commit().await?;
        self.get_article(article_id).await
    }

    /// Write article metadata on behalf of `actor`. Fields the actor may not
    /// write are skipped and listed in the outcome.
    pub async fn write_article_meta(
        &self,
        actor: &Actor,
        article_id: &str,
        meta: ArticleMeta,
    ) -> Result<MetaWriteOutcome, DatabaseError> {
        let article = self.get_article(article_id).await?;
        let (meta, outcome) = meta.permitted(actor);
        for field in &outcome.skipped {
            tracing::debug!(%field, role = %actor.role, article_id, "metadata field skipped");
        }

        if let Some(Some(menu_id)) = &meta.menu
            && !self.db().exists("menus", menu_id).await?
        {
            return Err(DatabaseError::Validation(format!("unknown menu {menu_id}")));
        }
        if let Some(states) = &meta.states
            && !states.is_normal()
            && !article.is_documentation()
        {
            return Err(DatabaseError::Validation(
                "state flags only apply to documentation articles".into(),
            ));
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;
        if let Some(menu) = &meta.menu {
            sets.push(format!("menu_id = ?{idx}"));
            params.push(menu.as_deref().into());
            idx += 1;
        }
        if let Some(states) = &meta.states {
            sets.push(format!("states = ?{idx}"));
            params.push(encode_states(states)?.into());
            idx += 1;
        }
        if sets.is_empty() {
            return Ok(outcome);
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;
        params.push(article_id.into());
        let sql = format!("UPDATE articles SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(outcome)
    }
}
