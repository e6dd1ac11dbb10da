use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Challenge {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub points: Option<i64>,
    pub exercice_id: Option<i64>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub challenge_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub author_id: Option<Uuid>,
    /// User references, stored as a JSON array of uids or an object keyed by uid
    pub participants: Option<Value>,
    pub achievers: Option<Value>,
}

impl Challenge {
    /// Whether `uid` appears among the participants, in either stored shape
    pub fn has_participant(&self, uid: &Uuid) -> bool {
        let uid = uid.to_string();
        match &self.participants {
            Some(Value::Array(items)) => items.iter().any(|item| item.as_str() == Some(uid.as_str())),
            Some(Value::Object(map)) => map.contains_key(&uid),
            _ => false,
        }
    }
}

/// Body of `POST /api/challenges`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChallenge {
    pub name: String,
    pub description: Option<String>,
    pub points: Option<i64>,
    pub exercice_id: Option<i64>,
    #[serde(rename = "type")]
    pub challenge_type: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub author_id: Option<Uuid>,
}
