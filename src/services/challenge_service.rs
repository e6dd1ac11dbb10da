use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Challenge, NewChallenge};

#[derive(Clone)]
pub struct ChallengeService {
    db: PgPool,
}

impl ChallengeService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_challenges(&self) -> Result<Vec<Challenge>> {
        let challenges = sqlx::query_as::<_, Challenge>("SELECT * FROM challenges ORDER BY id")
            .fetch_all(&self.db)
            .await?;

        Ok(challenges)
    }

    pub async fn list_challenges_by_author(&self, author_id: Uuid) -> Result<Vec<Challenge>> {
        let challenges = sqlx::query_as::<_, Challenge>(
            "SELECT * FROM challenges WHERE author_id = $1 ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&self.db)
        .await?;

        Ok(challenges)
    }

    /// Challenges listing `uid` among their participants.
    ///
    /// Participants are stored either as an array of uids or as an object
    /// keyed by uid, so the membership test runs on the decoded rows.
    pub async fn list_challenges_joined(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        let challenges = sqlx::query_as::<_, Challenge>(
            "SELECT * FROM challenges WHERE participants IS NOT NULL ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(challenges
            .into_iter()
            .filter(|challenge| challenge.has_participant(&uid))
            .collect())
    }

    pub async fn create_challenge(&self, challenge: NewChallenge) -> Result<Challenge> {
        let challenge = sqlx::query_as::<_, Challenge>(
            r#"
            INSERT INTO challenges (name, description, points, exercice_id, type, start_at, end_at, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(challenge.name)
        .bind(challenge.description)
        .bind(challenge.points)
        .bind(challenge.exercice_id)
        .bind(challenge.challenge_type)
        .bind(challenge.start_at)
        .bind(challenge.end_at)
        .bind(challenge.author_id)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(challenge)
    }
}
