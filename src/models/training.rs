use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub creation_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub activities_list: Option<String>,
    pub author_id: Option<Uuid>,
    pub photos: Option<String>,
    pub exercise_id: Option<i64>,
}
