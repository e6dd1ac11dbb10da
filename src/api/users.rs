use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use super::{AppState, GatewayError};
use crate::models::{CountResponse, UserDetail};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    tracing::debug!("Handling GET /api/users");

    let users = state
        .accessors
        .users()
        .await
        .map_err(GatewayError::backend("Failed to fetch users"))?;

    tracing::debug!("Relaying {} users", users.len());
    Ok(Json(json!({ "users": users })))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserDetail>, GatewayError> {
    tracing::debug!("Handling GET /api/users/{}", user_id);

    let user = state
        .accessors
        .user_by_id(user_id)
        .await
        .map_err(GatewayError::backend("Failed to fetch user"))?
        .ok_or(GatewayError::NotFound("User not found"))?;

    Ok(Json(UserDetail { user }))
}

/// GET /api/users_count
pub async fn count_users(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, GatewayError> {
    let count = state
        .accessors
        .users_count()
        .await
        .map_err(GatewayError::backend("Failed to fetch user count"))?;

    Ok(Json(CountResponse { count }))
}
