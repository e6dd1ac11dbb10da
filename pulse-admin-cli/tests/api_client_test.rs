use pulse_admin_cli::api::{ApiClient, ApiError};
use pulse_admin_cli::config::Config;
use serde_json::json;

fn client_for(url: &str) -> ApiClient {
    let mut config = Config::default();
    config.api.base_url = url.to_string();
    config.api.timeout_seconds = 5;
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_json_returns_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users_count")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":7}"#)
        .create_async()
        .await;

    let body = client_for(&server.url()).get_json("/api/users_count").await.unwrap();

    assert_eq!(body, json!({ "count": 7 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_field_becomes_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/users")
        .with_status(500)
        .with_body(r#"{"error":"Failed to fetch users"}"#)
        .create_async()
        .await;

    let err = client_for(&server.url()).get_json("/api/users").await.unwrap_err();
    assert_eq!(err, ApiError::ServerError("Failed to fetch users".into()));
}

#[tokio::test]
async fn test_method_not_allowed_maps() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/api/users")
        .with_status(405)
        .with_body(r#"{"error":"Method not allowed"}"#)
        .create_async()
        .await;

    let err = client_for(&server.url()).delete("/api/users").await.unwrap_err();
    assert_eq!(err, ApiError::MethodNotAllowed("Method not allowed".into()));
}

#[tokio::test]
async fn test_non_json_body_is_invalid() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/reports")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client_for(&server.url()).get_json("/api/reports").await.unwrap_err();
    assert!(err.is_malformed_payload());
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/api/report/3")
        .with_status(200)
        .create_async()
        .await;

    let body = client_for(&server.url()).delete("/api/report/3").await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_failed_request_is_issued_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/exercises")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let result = client_for(&server.url())
        .post_json("/api/exercises", &json!({ "title": "Plank" }))
        .await;

    assert!(matches!(result, Err(ApiError::ServerError(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_gateway_is_network_error() {
    let err = client_for("http://127.0.0.1:9").get_json("/api/users").await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError(_)));
}

#[test]
fn test_api_error_from_status() {
    use reqwest::StatusCode;

    assert_eq!(
        ApiError::from_status(StatusCode::NOT_FOUND, "Comment not found".into()),
        ApiError::NotFound("Comment not found".into())
    );
    assert_eq!(
        ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, String::new()),
        ApiError::BadRequest("Unprocessable Entity".into())
    );
    assert_eq!(
        ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream".into()),
        ApiError::ServerError("upstream".into())
    );
}
