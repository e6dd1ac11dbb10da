// Rows as the gateway relays them, plus their list configuration

pub mod catalog;
pub mod moderation;
pub mod user;

pub use catalog::{Challenge, Exercise, NewChallenge, NewExercise, Training};
pub use moderation::{Comment, Report};
pub use user::User;
