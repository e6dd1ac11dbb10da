use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::view::{DetailItem, ListItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl DetailItem for Comment {
    const FIELD: &'static str = "comment";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub comment_id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListItem for Report {
    const FIELD: &'static str = "reports";

    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.comment_id.to_string())
    }
}
