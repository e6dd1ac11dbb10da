// Gateway handlers relaying one accessor call per request

pub mod challenges;
pub mod error;
pub mod exercises;
pub mod health;
pub mod moderation;
pub mod routes;
pub mod trainings;
pub mod users;

pub use error::GatewayError;
pub use routes::{create_routes, AppState};
