use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::{AppState, GatewayError};
use crate::models::CountResponse;

/// GET /api/trainings
pub async fn list_trainings(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    tracing::debug!("Handling GET /api/trainings");

    let trainings = state
        .accessors
        .trainings()
        .await
        .map_err(GatewayError::backend("Failed to fetch trainings"))?;

    Ok(Json(json!({ "trainings": trainings })))
}

/// GET /api/trainings_count
pub async fn count_trainings(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, GatewayError> {
    let count = state
        .accessors
        .trainings_count()
        .await
        .map_err(GatewayError::backend("Failed to fetch training count"))?;

    Ok(Json(CountResponse { count }))
}

/// GET /api/user_training/:uid
pub async fn list_user_trainings(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> Result<Json<Value>, GatewayError> {
    tracing::debug!("Handling GET /api/user_training/{}", uid);

    let trainings = state
        .accessors
        .trainings_by_author(uid)
        .await
        .map_err(GatewayError::backend("Failed to fetch user trainings"))?;

    Ok(Json(json!({ "trainings": trainings })))
}
