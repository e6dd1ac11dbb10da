use anyhow::Result;
use sqlx::PgPool;

use crate::models::{Comment, Report};

#[derive(Clone)]
pub struct ModerationService {
    db: PgPool,
}

impl ModerationService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>("SELECT * FROM reports ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await?;

        Ok(reports)
    }

    pub async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.db)
            .await?;

        Ok(comment)
    }

    /// Delete a comment together with the reports pointing at it
    pub async fn delete_comment(&self, comment_id: i64) -> Result<bool> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM reports WHERE comment_id = $1")
            .bind(comment_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Dismiss every report filed against a comment, keeping the comment
    pub async fn delete_reports_for_comment(&self, comment_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM reports WHERE comment_id = $1")
            .bind(comment_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
