use anyhow::Result;
use sqlx::PgPool;

use crate::models::{Exercise, NewExercise};

#[derive(Clone)]
pub struct ExerciseService {
    db: PgPool,
}

impl ExerciseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>("SELECT * FROM exercises ORDER BY id")
            .fetch_all(&self.db)
            .await?;

        Ok(exercises)
    }

    pub async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (title, difficulty, type, pod_count)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(exercise.title)
        .bind(exercise.difficulty)
        .bind(exercise.exercise_type)
        .bind(exercise.pod_count)
        .fetch_one(&self.db)
        .await?;

        Ok(exercise)
    }
}
