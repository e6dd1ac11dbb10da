use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use uuid::Uuid;

use super::AdminBackend;
use crate::config::ReadPolicy;
use crate::models::{Challenge, Comment, Exercise, NewChallenge, NewExercise, Report, Training, User};

/// Normalizes backend outcomes for the gateway handlers.
///
/// Under [`ReadPolicy::Degrade`] a failed read is logged and replaced by an
/// empty list, an absent row or a zero count. Writes always propagate.
#[derive(Clone)]
pub struct Accessors {
    backend: Arc<dyn AdminBackend>,
    policy: ReadPolicy,
}

impl Accessors {
    pub fn new(backend: Arc<dyn AdminBackend>, policy: ReadPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> ReadPolicy {
        self.policy
    }

    async fn read<T, F>(&self, what: &'static str, query: F, fallback: T) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match query.await {
            Ok(rows) => Ok(rows),
            Err(e) => match self.policy {
                ReadPolicy::Degrade => {
                    tracing::error!("Failed to read {}, answering default: {:#}", what, e);
                    Ok(fallback)
                }
                ReadPolicy::Strict => Err(e.context(format!("Failed to read {}", what))),
            },
        }
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.read("users", self.backend.list_users(), Vec::new()).await
    }

    pub async fn user_by_id(&self, user_id: i64) -> Result<Option<User>> {
        self.read("user", self.backend.get_user(user_id), None).await
    }

    pub async fn users_count(&self) -> Result<i64> {
        self.read("users count", self.backend.count_users(), 0).await
    }

    pub async fn trainings(&self) -> Result<Vec<Training>> {
        self.read("trainings", self.backend.list_trainings(), Vec::new()).await
    }

    pub async fn trainings_by_author(&self, uid: Uuid) -> Result<Vec<Training>> {
        self.read("user trainings", self.backend.list_trainings_by_author(uid), Vec::new())
            .await
    }

    pub async fn trainings_count(&self) -> Result<i64> {
        self.read("trainings count", self.backend.count_trainings(), 0).await
    }

    pub async fn exercises(&self) -> Result<Vec<Exercise>> {
        self.read("exercises", self.backend.list_exercises(), Vec::new()).await
    }

    pub async fn add_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        self.backend.insert_exercise(exercise).await
    }

    pub async fn challenges(&self) -> Result<Vec<Challenge>> {
        self.read("challenges", self.backend.list_challenges(), Vec::new()).await
    }

    pub async fn challenges_by_author(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        self.read("created challenges", self.backend.list_challenges_by_author(uid), Vec::new())
            .await
    }

    pub async fn challenges_joined(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        self.read("joined challenges", self.backend.list_challenges_joined(uid), Vec::new())
            .await
    }

    pub async fn add_challenge(&self, challenge: NewChallenge) -> Result<Challenge> {
        self.backend.insert_challenge(challenge).await
    }

    pub async fn reports(&self) -> Result<Vec<Report>> {
        self.read("reports", self.backend.list_reports(), Vec::new()).await
    }

    pub async fn comment_by_id(&self, comment_id: i64) -> Result<Option<Comment>> {
        self.read("comment", self.backend.get_comment(comment_id), None).await
    }

    pub async fn remove_comment(&self, comment_id: i64) -> Result<bool> {
        self.backend.delete_comment(comment_id).await
    }

    pub async fn dismiss_reports(&self, comment_id: i64) -> Result<u64> {
        self.backend.delete_reports_for_comment(comment_id).await
    }
}
