use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use super::{AppState, GatewayError};
use crate::models::{Exercise, NewExercise};

/// GET /api/exercises
pub async fn list_exercises(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    tracing::debug!("Handling GET /api/exercises");

    let exercises = state
        .accessors
        .exercises()
        .await
        .map_err(GatewayError::backend("Failed to fetch exercises"))?;

    Ok(Json(json!({ "exercises": exercises })))
}

/// POST /api/exercises
pub async fn create_exercise(
    State(state): State<AppState>,
    Json(exercise): Json<NewExercise>,
) -> Result<Json<Exercise>, GatewayError> {
    tracing::debug!("Handling POST /api/exercises ({})", exercise.title);

    let created = state
        .accessors
        .add_exercise(exercise)
        .await
        .map_err(GatewayError::backend("Failed to create exercise"))?;

    tracing::info!("Created exercise {}", created.id);
    Ok(Json(created))
}
