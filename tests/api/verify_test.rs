//! Receipt verification endpoint tests

use serde_json::json;

use crate::common::*;
use muster_server::receipt::{generate_attendance_hash, HashableEntry, Sha256Digest};
use muster_server::NewEntry;

/// Submit an entry and return (sheet_id, receipt hash, display form)
async fn submitted_receipt(app: axum::Router) -> (String, String, String) {
    let sheet_id = create_test_sheet(app.clone(), None).await;
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/v1/sheets/{sheet_id}/entries"),
        sample_entry_payload(),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let hash = body["receipt"]["hash"].as_str().unwrap().to_string();
    let display = body["receipt"]["display"].as_str().unwrap().to_string();
    (sheet_id, hash, display)
}

#[tokio::test]
async fn test_verify_valid_receipt() {
    let app = test_app().await;
    let (sheet_id, hash, _) = submitted_receipt(app.clone()).await;

    let (status, body) = send_json(app, "POST", "/v1/verify", json!({"receipt": hash}), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "valid");
    assert_eq!(body["entry"]["first_name"], "Ann");
    assert_eq!(body["sheet"]["id"].as_str().unwrap(), sheet_id);
}

#[tokio::test]
async fn test_verify_accepts_display_formatted_receipt() {
    let app = test_app().await;
    let (_, _, display) = submitted_receipt(app.clone()).await;
    assert!(display.contains(' '));

    let (status, body) =
        send_json(app, "POST", "/v1/verify", json!({"receipt": display}), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "valid");
}

#[tokio::test]
async fn test_verify_unknown_receipt_is_not_found() {
    let app = test_app().await;
    let (status, body) = send_json(
        app,
        "POST",
        "/v1/verify",
        json!({"receipt": "a".repeat(64)}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "not_found");
    assert!(body.get("entry").is_none());
}

#[tokio::test]
async fn test_verify_malformed_receipt_rejected_before_lookup() {
    let app = test_app().await;

    let too_short = "a".repeat(63);
    let too_long = "a".repeat(65);
    for bad in ["", "xyz", too_short.as_str(), too_long.as_str()] {
        let (status, body) = send_json(
            app.clone(),
            "POST",
            "/v1/verify",
            json!({"receipt": bad}),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "for input {bad:?}");
        assert_error_code(&body, "INVALID_HASH");
    }
}

#[tokio::test]
async fn test_verify_tampered_record() {
    let (app, state) = test_app_with_storage().await;
    let sheet_id = create_test_sheet(app.clone(), None).await;

    // Insert directly and attach a hash computed over DIFFERENT data, so
    // the stored row no longer recomputes to its attached hash.
    let entry = state
        .storage
        .insert_entry(NewEntry {
            sheet_id: sheet_id.parse().unwrap(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            timestamp: "2024-06-01T06:00:00Z".to_string(),
            email: None,
            phone: None,
            rank: None,
            badge_number: None,
            unit: None,
            age: None,
        })
        .await
        .unwrap();

    let mut forged = HashableEntry::from_entry(&entry);
    forged.last_name = "Loe".to_string();
    let forged_hash = generate_attendance_hash(&forged, &Sha256Digest).unwrap();
    state.storage.attach_hash(&entry.id, &forged_hash).await.unwrap();

    let (status, body) = send_json(
        app,
        "POST",
        "/v1/verify",
        json!({"receipt": forged_hash}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "tampered");
    assert_eq!(body["entry"]["id"].as_str().unwrap(), entry.id.to_string());
}
