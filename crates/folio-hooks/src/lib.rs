//! # folio-hooks
//!
//! Typed lifecycle hooks for Folio articles.
//!
//! Collaborators register closures directly against a named lifecycle point
//! instead of attaching callbacks to string hook names:
//!
//! - `before_save`: may rewrite an [`ArticleDraft`] or veto the save
//! - `after_save`: observes the stored [`Article`]
//! - `content`: ordered transforms of the article body while rendering
//! - `after_render`: ordered transforms of the finished page
//!
//! Hooks run by ascending priority; equal priorities run in registration
//! order.

mod error;

pub use error::HookError;

use std::sync::Arc;

use folio_core::entities::{Article, ArticleDraft};

/// Default priority for hooks registered without one.
pub const DEFAULT_PRIORITY: i32 = 10;

pub type BeforeSaveFn = dyn Fn(&mut ArticleDraft) -> Result<(), String> + Send + Sync;
pub type AfterSaveFn = dyn Fn(&Article) + Send + Sync;
pub type ContentFn = dyn Fn(&Article, String) -> String + Send + Sync;
pub type AfterRenderFn = dyn Fn(&Article, String) -> String + Send + Sync;

struct Entry<F: ?Sized> {
    name: String,
    priority: i32,
    hook: Arc<F>,
}

impl<F: ?Sized> Clone for Entry<F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            priority: self.priority,
            hook: Arc::clone(&self.hook),
        }
    }
}

/// Insert keeping ascending priority; ties keep registration order.
fn insert_ordered<F: ?Sized>(list: &mut Vec<Entry<F>>, entry: Entry<F>) {
    let at = list.partition_point(|e| e.priority <= entry.priority);
    list.insert(at, entry);
}

/// Registry of lifecycle hooks. Cheap to clone; clones share the closures.
#[derive(Clone, Default)]
pub struct HookRegistry {
    before_save: Vec<Entry<BeforeSaveFn>>,
    after_save: Vec<Entry<AfterSaveFn>>,
    content: Vec<Entry<ContentFn>>,
    after_render: Vec<Entry<AfterRenderFn>>,
}

fn names<F: ?Sized>(list: &[Entry<F>]) -> Vec<&str> {
    list.iter().map(|e| e.name.as_str()).collect()
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("before_save", &names(&self.before_save))
            .field("after_save", &names(&self.after_save))
            .field("content", &names(&self.content))
            .field("after_render", &names(&self.after_render))
            .finish()
    }
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before_save<F>(&mut self, name: &str, priority: i32, hook: F) -> &mut Self
    where
        F: Fn(&mut ArticleDraft) -> Result<(), String> + Send + Sync + 'static,
    {
        insert_ordered(
            &mut self.before_save,
            Entry {
                name: name.to_string(),
                priority,
                hook: Arc::new(hook),
            },
        );
        self
    }

    pub fn after_save<F>(&mut self, name: &str, priority: i32, hook: F) -> &mut Self
    where
        F: Fn(&Article) + Send + Sync + 'static,
    {
        insert_ordered(
            &mut self.after_save,
            Entry {
                name: name.to_string(),
                priority,
                hook: Arc::new(hook),
            },
        );
        self
    }

    pub fn content<F>(&mut self, name: &str, priority: i32, hook: F) -> &mut Self
    where
        F: Fn(&Article, String) -> String + Send + Sync + 'static,
    {
        insert_ordered(
            &mut self.content,
            Entry {
                name: name.to_string(),
                priority,
                hook: Arc::new(hook),
            },
        );
        self
    }

    pub fn after_render<F>(&mut self, name: &str, priority: i32, hook: F) -> &mut Self
    where
        F: Fn(&Article, String) -> String + Send + Sync + 'static,
    {
        insert_ordered(
            &mut self.after_render,
            Entry {
                name: name.to_string(),
                priority,
                hook: Arc::new(hook),
            },
        );
        self
    }

    /// Run every `before_save` hook. The first veto stops the chain.
    pub fn run_before_save(&self, draft: &mut ArticleDraft) -> Result<(), HookError> {
        for entry in &self.before_save {
            if let Err(reason) = (entry.hook)(draft) {
                tracing::debug!(hook = %entry.name, %reason, "before_save veto");
                return Err(HookError::Vetoed {
                    hook: entry.name.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    pub fn run_after_save(&self, article: &Article) {
        for entry in &self.after_save {
            (entry.hook)(article);
        }
    }

    /// Pass the article body through every content filter.
    #[must_use]
    pub fn apply_content(&self, article: &Article, content: String) -> String {
        self.content
            .iter()
            .fold(content, |acc, entry| (entry.hook)(article, acc))
    }

    /// Pass a rendered page through every `after_render` hook.
    #[must_use]
    pub fn apply_after_render(&self, article: &Article, page: String) -> String {
        self.after_render
            .iter()
            .fold(page, |acc, entry| (entry.hook)(article, acc))
    }

    /// Names of the registered content filters, in run order.
    #[must_use]
    pub fn content_filter_names(&self) -> Vec<&str> {
        names(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_core::enums::{ArticleStatus, ContentType};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn article() -> Article {
        let now = Utc::now();
        Article {
            id: "art-00000001".into(),
            slug: "intro".into(),
            title: "Intro".into(),
            content: String::new(),
            content_type: ContentType::Documentation,
            status: ArticleStatus::Publish,
            states: Default::default(),
            menu_id: None,
            topic_ids: vec![],
            helpful: 0,
            unhelpful: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn content_filters_run_by_priority_then_registration() {
        let mut hooks = HookRegistry::new();
        hooks
            .content("late", 20, |_, s| format!("{s}c"))
            .content("first", DEFAULT_PRIORITY, |_, s| format!("{s}a"))
            .content("second", DEFAULT_PRIORITY, |_, s| format!("{s}b"));

        assert_eq!(hooks.content_filter_names(), vec!["first", "second", "late"]);
        assert_eq!(hooks.apply_content(&article(), String::new()), "abc");
    }

    #[test]
    fn before_save_can_mutate_and_veto() {
        let mut hooks = HookRegistry::new();
        hooks
            .before_save("trim", 1, |draft| {
                draft.title = draft.title.trim().to_string();
                Ok(())
            })
            .before_save("no-empty", 2, |draft| {
                if draft.title.is_empty() {
                    Err("title is empty".into())
                } else {
                    Ok(())
                }
            });

        let mut ok = ArticleDraft::new("  Hello ", "");
        hooks.run_before_save(&mut ok).unwrap();
        assert_eq!(ok.title, "Hello");

        let mut bad = ArticleDraft::new("   ", "");
        let err = hooks.run_before_save(&mut bad).unwrap_err();
        assert!(matches!(err, HookError::Vetoed { ref hook, .. } if hook == "no-empty"));
    }

    #[test]
    fn after_save_observes_article() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut hooks = HookRegistry::new();
        hooks.after_save("record", DEFAULT_PRIORITY, move |a| {
            sink.lock().unwrap().push(a.id.clone());
        });

        hooks.run_after_save(&article());
        assert_eq!(*seen.lock().unwrap(), vec!["art-00000001".to_string()]);
    }

    #[test]
    fn after_render_wraps_page() {
        let mut hooks = HookRegistry::new();
        hooks.after_render("footer", DEFAULT_PRIORITY, |a, page| {
            format!("{page}<!-- {} -->", a.slug)
        });
        assert_eq!(
            hooks.apply_after_render(&article(), "<p>x</p>".into()),
            "<p>x</p><!-- intro -->"
        );
    }
}
