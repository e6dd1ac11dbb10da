use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::{AppState, GatewayError};
use crate::models::{Challenge, NewChallenge};

/// GET /api/challenges
pub async fn list_challenges(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    tracing::debug!("Handling GET /api/challenges");

    let challenges = state
        .accessors
        .challenges()
        .await
        .map_err(GatewayError::backend("Failed to fetch challenges"))?;

    Ok(Json(json!({ "challenges": challenges })))
}

/// POST /api/challenges
pub async fn create_challenge(
    State(state): State<AppState>,
    Json(challenge): Json<NewChallenge>,
) -> Result<Json<Challenge>, GatewayError> {
    tracing::debug!("Handling POST /api/challenges ({})", challenge.name);

    let created = state
        .accessors
        .add_challenge(challenge)
        .await
        .map_err(GatewayError::backend("Failed to create challenge"))?;

    tracing::info!("Created challenge {}", created.id);
    Ok(Json(created))
}

/// GET /api/challenges_user/:uid
pub async fn list_created_challenges(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> Result<Json<Value>, GatewayError> {
    let challenges = state
        .accessors
        .challenges_by_author(uid)
        .await
        .map_err(GatewayError::backend("Failed to fetch user challenges"))?;

    Ok(Json(json!({ "challenges": challenges })))
}

/// GET /api/defis/:uid
pub async fn list_joined_challenges(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> Result<Json<Value>, GatewayError> {
    let challenges = state
        .accessors
        .challenges_joined(uid)
        .await
        .map_err(GatewayError::backend("Failed to fetch joined challenges"))?;

    Ok(Json(json!({ "challenges": challenges })))
}
