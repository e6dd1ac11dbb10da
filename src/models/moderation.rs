use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

/// Envelope answered by `GET /api/comment/:id`
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentDetail {
    pub comment: Comment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i64,
    pub comment_id: i64,
    pub user_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
