use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a gateway handler can answer with.
///
/// Backend detail stays in the logs; the client only ever sees the fixed
/// message attached to the operation.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{message}")]
    Backend {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl GatewayError {
    /// Wrap an accessor failure under a fixed client-facing message
    pub fn backend(message: &'static str) -> impl FnOnce(anyhow::Error) -> GatewayError {
        move |source| GatewayError::Backend { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let GatewayError::Backend { message, source } = &self {
            tracing::error!("{}: {:#}", message, source);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

/// Fallback for any verb a gateway path does not implement
pub async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}
