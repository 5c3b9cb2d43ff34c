//! End-to-end behavior of the HTTP layer against a local mock backend.

mod common;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use jobdeck_client::{ApiClient, ApiError};

#[tokio::test]
async fn decodes_json_response() {
    let router = Router::new().route("/ping", get(|| async { Json(json!({"message": "pong"})) }));
    let base_url = common::spawn_server(router).await;

    let client = ApiClient::new(base_url);
    let body: Value = client.get("/ping").await.unwrap();
    assert_eq!(body["message"], "pong");
}

#[tokio::test]
async fn status_error_carries_backend_detail() {
    let router = Router::new().route(
        "/jobs/missing",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "job not found"})),
            )
        }),
    );
    let base_url = common::spawn_server(router).await;

    let client = ApiClient::new(base_url);
    let err = client.get::<Value>("/jobs/missing").await.unwrap_err();
    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "job not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.to_string().contains("404"));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn status_error_without_detail_uses_reason_phrase() {
    let router = Router::new().route(
        "/broken",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream on fire") }),
    );
    let base_url = common::spawn_server(router).await;

    let client = ApiClient::new(base_url);
    let err = client.get::<Value>("/broken").await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_non_json_success_response() {
    // axum serves a bare &str as text/plain.
    let router = Router::new().route("/health", get(|| async { "ok" }));
    let base_url = common::spawn_server(router).await;

    let client = ApiClient::new(base_url);
    let err = client.get::<Value>("/health").await.unwrap_err();
    match err {
        ApiError::UnexpectedContentType {
            content_type,
            snippet,
        } => {
            assert!(content_type.starts_with("text/plain"), "{content_type}");
            assert_eq!(snippet, "ok");
        }
        other => panic!("expected content-type error, got {other:?}"),
    }
}

#[tokio::test]
async fn bearer_header_tracks_token_state() {
    let router = Router::new().route(
        "/echo-auth",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Json(json!({ "authorization": auth }))
        }),
    );
    let base_url = common::spawn_server(router).await;

    let client = ApiClient::new(base_url);

    let body: Value = client.get("/echo-auth").await.unwrap();
    assert_eq!(body["authorization"], Value::Null);

    client.set_auth_token(Some("tok-1".to_string()));
    let body: Value = client.get("/echo-auth").await.unwrap();
    assert_eq!(body["authorization"], "Bearer tok-1");

    client.set_auth_token(None);
    let body: Value = client.get("/echo-auth").await.unwrap();
    assert_eq!(body["authorization"], Value::Null);
}
