// Backend accessors: one query per operation against the hosted store

pub mod accessors;
pub mod challenge_service;
pub mod exercise_service;
pub mod moderation_service;
pub mod training_service;
pub mod user_service;

pub use accessors::Accessors;
pub use challenge_service::ChallengeService;
pub use exercise_service::ExerciseService;
pub use moderation_service::ModerationService;
pub use training_service::TrainingService;
pub use user_service::UserService;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Challenge, Comment, Exercise, NewChallenge, NewExercise, Report, Training, User};

/// Every query the gateway can issue against the store.
///
/// Implementations report failures as-is; the read/write normalization lives
/// in [`Accessors`].
#[async_trait]
pub trait AdminBackend: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>>;
    async fn count_users(&self) -> Result<i64>;

    async fn list_trainings(&self) -> Result<Vec<Training>>;
    async fn list_trainings_by_author(&self, uid: Uuid) -> Result<Vec<Training>>;
    async fn count_trainings(&self) -> Result<i64>;

    async fn list_exercises(&self) -> Result<Vec<Exercise>>;
    async fn insert_exercise(&self, exercise: NewExercise) -> Result<Exercise>;

    async fn list_challenges(&self) -> Result<Vec<Challenge>>;
    async fn list_challenges_by_author(&self, uid: Uuid) -> Result<Vec<Challenge>>;
    async fn list_challenges_joined(&self, uid: Uuid) -> Result<Vec<Challenge>>;
    async fn insert_challenge(&self, challenge: NewChallenge) -> Result<Challenge>;

    async fn list_reports(&self) -> Result<Vec<Report>>;
    async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>>;
    async fn delete_comment(&self, comment_id: i64) -> Result<bool>;
    async fn delete_reports_for_comment(&self, comment_id: i64) -> Result<u64>;
}

/// PostgreSQL-backed store sharing one pool across the entity services
#[derive(Clone)]
pub struct PgBackend {
    users: UserService,
    trainings: TrainingService,
    exercises: ExerciseService,
    challenges: ChallengeService,
    moderation: ModerationService,
}

impl PgBackend {
    pub fn new(db: PgPool) -> Self {
        Self {
            users: UserService::new(db.clone()),
            trainings: TrainingService::new(db.clone()),
            exercises: ExerciseService::new(db.clone()),
            challenges: ChallengeService::new(db.clone()),
            moderation: ModerationService::new(db),
        }
    }
}

#[async_trait]
impl AdminBackend for PgBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.users.list_users().await
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        self.users.get_user_by_id(user_id).await
    }

    async fn count_users(&self) -> Result<i64> {
        self.users.count_users().await
    }

    async fn list_trainings(&self) -> Result<Vec<Training>> {
        self.trainings.list_trainings().await
    }

    async fn list_trainings_by_author(&self, uid: Uuid) -> Result<Vec<Training>> {
        self.trainings.list_trainings_by_author(uid).await
    }

    async fn count_trainings(&self) -> Result<i64> {
        self.trainings.count_trainings().await
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        self.exercises.list_exercises().await
    }

    async fn insert_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        self.exercises.create_exercise(exercise).await
    }

    async fn list_challenges(&self) -> Result<Vec<Challenge>> {
        self.challenges.list_challenges().await
    }

    async fn list_challenges_by_author(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        self.challenges.list_challenges_by_author(uid).await
    }

    async fn list_challenges_joined(&self, uid: Uuid) -> Result<Vec<Challenge>> {
        self.challenges.list_challenges_joined(uid).await
    }

    async fn insert_challenge(&self, challenge: NewChallenge) -> Result<Challenge> {
        self.challenges.create_challenge(challenge).await
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        self.moderation.list_reports().await
    }

    async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>> {
        self.moderation.get_comment(comment_id).await
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<bool> {
        self.moderation.delete_comment(comment_id).await
    }

    async fn delete_reports_for_comment(&self, comment_id: i64) -> Result<u64> {
        self.moderation.delete_reports_for_comment(comment_id).await
    }
}
