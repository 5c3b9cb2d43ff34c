//! Service wrappers exercised against a local mock backend: paths, query
//! encoding, and the shared-session token flow.

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, RawQuery};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use jobdeck_client::models::auth::LoginRequest;
use jobdeck_client::models::job::JobSearchFilters;
use jobdeck_client::models::skill_bank::SkillCreate;
use jobdeck_client::models::timeline::TimelineQuery;
use jobdeck_client::services::{AuthService, JobService, SkillBankService, TimelineService};
use jobdeck_client::ApiClient;

#[tokio::test]
async fn login_caches_token_and_logout_clears_it() {
    let seen_auth: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = seen_auth.clone();

    let router = Router::new()
        .route(
            "/auth/login",
            post(|| async {
                Json(json!({
                    "access_token": "tok-123",
                    "token_type": "bearer",
                    "user": {"id": "u1", "email": "ada@example.com"}
                }))
            }),
        )
        .route(
            "/auth/logout",
            post(|| async { Json(json!({"message": "logged out"})) }),
        )
        .route(
            "/jobs",
            get(move |headers: HeaderMap| {
                let seen = seen.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    seen.lock().unwrap().push(auth);
                    Json(json!({"jobs": [], "total": 0}))
                }
            }),
        );
    let base_url = common::spawn_server(router).await;

    let client = ApiClient::new(base_url);
    let auth = AuthService::new(client.clone());
    let jobs = JobService::new(client.clone());

    let response = auth
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.access_token, "tok-123");
    assert_eq!(client.auth_token().as_deref(), Some("tok-123"));

    jobs.list_jobs().await.unwrap();
    auth.logout().await.unwrap();
    assert_eq!(client.auth_token(), None);
    jobs.list_jobs().await.unwrap();

    let seen = seen_auth.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].as_deref(), Some("Bearer tok-123"));
    assert_eq!(seen[1], None);
}

#[tokio::test]
async fn search_jobs_sends_decoded_query_params() {
    let router = Router::new().route(
        "/jobs/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("query").map(String::as_str), Some("Frontend Developer"));
            assert_eq!(params.get("salary_min").map(String::as_str), Some("90000"));
            assert!(!params.contains_key("location"));
            Json(json!({
                "message": "ok",
                "user_id": "u1",
                "filters_applied": {"query": "Frontend Developer"},
                "results": [{
                    "job_id": "j1",
                    "title": "Frontend Developer",
                    "company": "Acme",
                    "salary_min": 95000
                }],
                "total_results": 1,
                "page": 1,
                "page_size": 20
            }))
        }),
    );
    let base_url = common::spawn_server(router).await;

    let jobs = JobService::new(ApiClient::new(base_url));
    let response = jobs
        .search_jobs(&JobSearchFilters {
            query: Some("Frontend Developer".to_string()),
            salary_min: Some(90_000),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].company, "Acme");
    assert_eq!(response.results[0].salary_min, Some(95_000));
}

#[tokio::test]
async fn timeline_event_types_repeat_in_query_string() {
    let raw_query: Arc<Mutex<String>> = Arc::new(Mutex::new(String::new()));
    let captured = raw_query.clone();

    let router = Router::new().route(
        "/timeline/user/:user_id",
        get(move |RawQuery(raw): RawQuery| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = raw.unwrap_or_default();
                Json(json!([]))
            }
        }),
    );
    let base_url = common::spawn_server(router).await;

    let timeline = TimelineService::new(ApiClient::new(base_url));
    let events = timeline
        .user_timeline(
            "u1",
            &TimelineQuery {
                limit: Some(5),
                event_types: vec!["job_saved".to_string(), "custom_event".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(events.is_empty());

    let raw = raw_query.lock().unwrap().clone();
    assert!(raw.contains("limit=5"), "{raw}");
    assert!(
        raw.contains("event_types=job_saved&event_types=custom_event"),
        "{raw}"
    );
}

#[tokio::test]
async fn add_skill_hits_subresource_path_and_returns_bank() {
    let router = Router::new().route(
        "/skill-banks/:user_id/skills",
        post(
            |Path(user_id): Path<String>, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(user_id, "u1");
                assert_eq!(body["name"], "Rust");
                // Unset optional fields stay off the wire.
                assert!(body.get("level").is_none());
                Json(json!({
                    "id": "sb1",
                    "user_id": user_id,
                    "skills": [{"id": "s1", "name": "Rust"}],
                    "created_at": "2025-01-01T00:00:00Z",
                    "updated_at": "2025-01-02T00:00:00Z"
                }))
            },
        ),
    );
    let base_url = common::spawn_server(router).await;

    let skill_banks = SkillBankService::new(ApiClient::new(base_url));
    let bank = skill_banks
        .add_skill(
            "u1",
            &SkillCreate {
                name: "Rust".to_string(),
                level: None,
                category: None,
                subcategory: None,
                years_experience: None,
                proficiency_score: None,
                description: None,
                keywords: vec![],
                is_featured: None,
                display_order: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(bank.id, "sb1");
    assert_eq!(bank.skills.len(), 1);
    assert_eq!(bank.skills[0].name, "Rust");
}
