use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Training;

#[derive(Clone)]
pub struct TrainingService {
    db: PgPool,
}

impl TrainingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_trainings(&self) -> Result<Vec<Training>> {
        let trainings = sqlx::query_as::<_, Training>("SELECT * FROM training ORDER BY id")
            .fetch_all(&self.db)
            .await?;

        Ok(trainings)
    }

    pub async fn list_trainings_by_author(&self, author_id: Uuid) -> Result<Vec<Training>> {
        let trainings = sqlx::query_as::<_, Training>(
            "SELECT * FROM training WHERE author_id = $1 ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&self.db)
        .await?;

        Ok(trainings)
    }

    pub async fn count_trainings(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM training")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
