//! Test fixtures and app setup utilities

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use muster_server::api::{create_router, AppState};
use muster_server::receipt::Sha256Digest;
use muster_server::{SqliteStore, Storage};

/// Create app state backed by in-memory storage
pub fn test_state(access_tokens: Option<Vec<String>>) -> Arc<AppState> {
    let storage = SqliteStore::in_memory().expect("Failed to create in-memory storage");
    storage.initialize().expect("Failed to initialize storage");

    Arc::new(AppState {
        storage: Arc::new(storage) as Arc<dyn Storage>,
        digest: Arc::new(Sha256Digest),
        access_tokens,
        base_url: "http://localhost:3000".to_string(),
    })
}

/// Create a test app with in-memory storage and no authentication
pub async fn test_app() -> Router {
    create_router(test_state(None))
}

/// Create a test app with Bearer token auth on sheet-owner routes
pub async fn test_app_with_tokens(tokens: &[&str]) -> Router {
    let tokens = tokens.iter().map(|t| t.to_string()).collect();
    create_router(test_state(Some(tokens)))
}

/// Create a test app plus direct storage access (for seeding/tampering)
pub async fn test_app_with_storage() -> (Router, Arc<AppState>) {
    let state = test_state(None);
    (create_router(state.clone()), state)
}

/// Send a JSON request, optionally with a Bearer token
pub async fn send_json(
    app: Router,
    method: &str,
    path: &str,
    body: Value,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response was not JSON")
    };
    (status, json)
}

/// Send a GET request, optionally with a Bearer token
pub async fn get_json(app: Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::get(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response was not JSON")
    };
    (status, json)
}

/// Create a sheet through the API, returning its id
pub async fn create_test_sheet(app: Router, token: Option<&str>) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/v1/sheets",
        json!({"title": "Morning Formation", "description": "0600 muster"}),
        token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "sheet creation failed: {body}");
    body["id"].as_str().expect("sheet id missing").to_string()
}

/// A complete sign-in payload
pub fn sample_entry_payload() -> Value {
    json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "timestamp": "2024-06-01T06:00:00Z",
        "rank": "SGT",
        "unit": "2nd Platoon",
        "badge_number": "A-113"
    })
}
