// Rows of the hosted store, relayed verbatim by the gateway

pub mod challenge;
pub mod exercise;
pub mod moderation;
pub mod training;
pub mod user;

pub use challenge::*;
pub use exercise::*;
pub use moderation::*;
pub use training::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Body of the `*_count` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}
