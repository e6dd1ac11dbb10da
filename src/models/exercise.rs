use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    pub difficulty: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub exercise_type: Option<String>,
    pub pod_count: Option<i32>,
}

/// Body of `POST /api/exercises`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    pub title: String,
    pub difficulty: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<String>,
    pub pod_count: Option<i32>,
}
