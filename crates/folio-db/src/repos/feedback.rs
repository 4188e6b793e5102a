//! Helpful / unhelpful counters on documentation articles.
//!
//! Increments are a single `UPDATE ... RETURNING` so concurrent votes on the
//! same article never lose a count. Pages and unknown IDs report zero and are
//! never written.

use folio_core::enums::Verdict;

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::service::FolioService;

const fn column(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Helpful => "helpful",
        Verdict::Unhelpful => "unhelpful",
    }
}

impl FolioService {
    /// Current count for `verdict`; 0 when the ID is not a documentation article.
    pub async fn read_feedback(
        &self,
        article_id: &str,
        verdict: Verdict,
    ) -> Result<u64, DatabaseError> {
        let col = column(verdict);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {col} FROM articles WHERE id = ?1 AND content_type = 'documentation'"
                ),
                [article_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => get_count(&row, 0),
            None => Ok(0),
        }
    }

    /// Add one to the `verdict` counter and return the new value.
    pub async fn record_feedback(
        &self,
        article_id: &str,
        verdict: Verdict,
    ) -> Result<u64, DatabaseError> {
        let col = column(verdict);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "UPDATE articles SET {col} = {col} + 1
                     WHERE id = ?1 AND content_type = 'documentation'
                     RETURNING {col}"
                ),
                [article_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => {
                let count = get_count(&row, 0)?;
                tracing::debug!(article_id, %verdict, count, "feedback recorded");
                Ok(count)
            }
            None => {
                tracing::debug!(article_id, %verdict, "feedback ignored for non-documentation id");
                Ok(0)
            }
        }
    }
}
