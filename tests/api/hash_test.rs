//! Hash generation endpoint tests

use serde_json::json;

use crate::common::*;
use muster_server::receipt::{generate_attendance_hash, HashableEntry, Sha256Digest};

#[tokio::test]
async fn test_hash_endpoint_matches_library() {
    let app = test_app().await;

    let (status, body) = send_json(
        app,
        "POST",
        "/v1/hash",
        json!({
            "entryData": {
                "id": "e1",
                "sheetId": "s1",
                "firstName": "Ann",
                "lastName": "LEE",
                "timestamp": "2024-01-01T10:00:00Z",
                "createdAt": "2024-01-01T10:00:01Z"
            }
        }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["algorithm"], "sha256");

    let expected = HashableEntry::builder()
        .id("e1")
        .sheet_id("s1")
        .first_name("Ann")
        .last_name("LEE")
        .timestamp("2024-01-01T10:00:00Z")
        .created_at("2024-01-01T10:00:01Z")
        .build()
        .unwrap();
    let expected = generate_attendance_hash(&expected, &Sha256Digest).unwrap();
    assert_eq!(body["hash"].as_str().unwrap(), expected);
}

#[tokio::test]
async fn test_hash_endpoint_rejects_missing_required_fields() {
    let app = test_app().await;

    let (status, body) = send_json(
        app,
        "POST",
        "/v1/hash",
        json!({
            "entryData": {
                "id": "e1",
                "sheetId": "s1",
                "firstName": "Ann"
            }
        }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&body, "MISSING_FIELD");
    assert!(body["error"].as_str().unwrap().contains("lastName"));
}

#[tokio::test]
async fn test_hash_endpoint_optional_fields_affect_hash() {
    let app = test_app().await;

    let base = json!({
        "id": "e1",
        "sheetId": "s1",
        "firstName": "Ann",
        "lastName": "Lee",
        "timestamp": "2024-01-01T10:00:00Z",
        "createdAt": "2024-01-01T10:00:01Z"
    });
    let mut with_unit = base.clone();
    with_unit["unit"] = json!("2nd Platoon");

    let (_, without) = send_json(
        app.clone(),
        "POST",
        "/v1/hash",
        json!({"entryData": base}),
        None,
    )
    .await;
    let (_, with) = send_json(app, "POST", "/v1/hash", json!({"entryData": with_unit}), None).await;

    assert_ne!(without["hash"], with["hash"]);
}
