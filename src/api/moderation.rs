use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use super::{AppState, GatewayError};
use crate::models::CommentDetail;

/// GET /api/reports
pub async fn list_reports(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    tracing::debug!("Handling GET /api/reports");

    let reports = state
        .accessors
        .reports()
        .await
        .map_err(GatewayError::backend("Failed to fetch reports"))?;

    Ok(Json(json!({ "reports": reports })))
}

/// GET /api/comment/:id
pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<Json<CommentDetail>, GatewayError> {
    let comment = state
        .accessors
        .comment_by_id(comment_id)
        .await
        .map_err(GatewayError::backend("Failed to fetch comment"))?
        .ok_or(GatewayError::NotFound("Comment not found"))?;

    Ok(Json(CommentDetail { comment }))
}

/// DELETE /api/comment/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<Json<Value>, GatewayError> {
    let deleted = state
        .accessors
        .remove_comment(comment_id)
        .await
        .map_err(GatewayError::backend("Failed to delete comment"))?;

    tracing::info!("Comment {} deleted: {}", comment_id, deleted);
    Ok(Json(json!({ "deleted": deleted })))
}

/// DELETE /api/report/:id
///
/// `id` is the reported comment: every report filed against it is dismissed
/// and the comment itself is kept.
pub async fn dismiss_reports(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<Json<Value>, GatewayError> {
    let dismissed = state
        .accessors
        .dismiss_reports(comment_id)
        .await
        .map_err(GatewayError::backend("Failed to delete report"))?;

    tracing::info!("Dismissed {} reports on comment {}", dismissed, comment_id);
    Ok(Json(json!({ "deleted": dismissed })))
}
