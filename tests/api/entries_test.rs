//! Sheet and entry endpoint tests

use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_create_and_fetch_sheet() {
    let app = test_app().await;

    let (status, sheet) = send_json(
        app.clone(),
        "POST",
        "/v1/sheets",
        json!({
            "title": "Company Muster",
            "description": "Weekly formation",
            "required_fields": ["first_name", "last_name", "rank"]
        }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sheet["title"], "Company Muster");
    let id = sheet["id"].as_str().unwrap();

    let (status, fetched) = get_json(app, &format!("/v1/sheets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], sheet["id"]);
    assert_eq!(fetched["required_fields"][2], "rank");
}

#[tokio::test]
async fn test_create_sheet_rejects_blank_title() {
    let app = test_app().await;
    let (status, body) = send_json(app, "POST", "/v1/sheets", json!({"title": "  "}), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&body, "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_fetch_unknown_sheet_is_404() {
    let app = test_app().await;
    let (status, body) = get_json(
        app,
        "/v1/sheets/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "SHEET_NOT_FOUND");
}

#[tokio::test]
async fn test_submit_entry_returns_receipt() {
    let app = test_app().await;
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
    assert_eq!(body["entry"]["first_name"], "Ann");
    assert_eq!(body["entry"]["sheet_id"].as_str().unwrap(), sheet_id);
    assert_valid_receipt_structure(&body["receipt"]);
    // The attached hash is reflected on the stored entry
    assert_eq!(body["entry"]["attendance_hash"], body["receipt"]["hash"]);
}

#[tokio::test]
async fn test_submit_entry_to_unknown_sheet_is_404() {
    let app = test_app().await;
    let (status, body) = send_json(
        app,
        "POST",
        "/v1/sheets/00000000-0000-0000-0000-000000000000/entries",
        sample_entry_payload(),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "SHEET_NOT_FOUND");
}

#[tokio::test]
async fn test_submit_entry_rejects_blank_names() {
    let app = test_app().await;
    let sheet_id = create_test_sheet(app.clone(), None).await;

    let (status, body) = send_json(
        app,
        "POST",
        &format!("/v1/sheets/{sheet_id}/entries"),
        json!({"first_name": " ", "last_name": "Lee", "timestamp": "2024-06-01T06:00:00Z"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&body, "MISSING_FIELD");
}

#[tokio::test]
async fn test_submit_entry_rejects_bad_timestamp() {
    let app = test_app().await;
    let sheet_id = create_test_sheet(app.clone(), None).await;

    let (status, body) = send_json(
        app,
        "POST",
        &format!("/v1/sheets/{sheet_id}/entries"),
        json!({"first_name": "Ann", "last_name": "Lee", "timestamp": "yesterday"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&body, "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_list_entries_in_submission_order() {
    let app = test_app().await;
    let sheet_id = create_test_sheet(app.clone(), None).await;

    for name in ["Ann", "Ben", "Cam"] {
        let (status, _) = send_json(
            app.clone(),
            "POST",
            &format!("/v1/sheets/{sheet_id}/entries"),
            json!({"first_name": name, "last_name": "Lee", "timestamp": "2024-06-01T06:00:00Z"}),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get_json(app, &format!("/v1/sheets/{sheet_id}/entries"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    let names: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Ben", "Cam"]);
}
