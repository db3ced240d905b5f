//! Attendance entry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::dto::{ListEntriesResponse, SubmitEntryRequest, SubmitEntryResponse};
use crate::api::state::AppState;
use crate::error::{ServerError, ServerResult};
use crate::receipt::issue_receipt;
use crate::traits::NewEntry;

/// POST /v1/sheets/{id}/entries - Submit a sign-in
///
/// Two-phase write: insert the entry (store assigns `id`/`created_at`),
/// then compute and attach the receipt hash. Attach failure does not fail
/// the submission; the response just carries no receipt.
pub async fn submit_entry(
    State(state): State<Arc<AppState>>,
    Path(sheet_id): Path<Uuid>,
    Json(req): Json<SubmitEntryRequest>,
) -> ServerResult<(StatusCode, Json<SubmitEntryResponse>)> {
    if req.first_name.trim().is_empty() {
        return Err(ServerError::MissingField("first_name"));
    }
    if req.last_name.trim().is_empty() {
        return Err(ServerError::MissingField("last_name"));
    }
    // Stored verbatim, but must at least parse as an instant
    if chrono::DateTime::parse_from_rfc3339(&req.timestamp).is_err() {
        return Err(ServerError::InvalidArgument(format!(
            "timestamp is not a valid ISO 8601 instant: {}",
            req.timestamp
        )));
    }

    // 404 before inserting anything against an unknown sheet
    let sheet = state.storage.get_sheet(&sheet_id).await?;

    let entry = state
        .storage
        .insert_entry(NewEntry {
            sheet_id: sheet.id,
            first_name: req.first_name,
            last_name: req.last_name,
            timestamp: req.timestamp,
            email: req.email,
            phone: req.phone,
            rank: req.rank,
            badge_number: req.badge_number,
            unit: req.unit,
            age: req.age,
        })
        .await?;

    let receipt = issue_receipt(state.storage.as_ref(), state.digest.as_ref(), &entry).await;

    let entry = match &receipt {
        // Reflect the attached hash without re-reading the row
        Some(r) => {
            let mut entry = entry;
            entry.attendance_hash = Some(r.hash.clone());
            entry
        }
        None => entry,
    };

    tracing::info!(
        entry_id = %entry.id,
        sheet_id = %sheet.id,
        receipt_issued = receipt.is_some(),
        "attendance recorded"
    );

    let verify_url = format!("{}/v1/verify", state.base_url);

    Ok((
        StatusCode::CREATED,
        Json(SubmitEntryResponse {
            entry,
            receipt,
            verify_url,
        }),
    ))
}

/// GET /v1/sheets/{id}/entries - Review a sheet's entries (owner route)
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(sheet_id): Path<Uuid>,
) -> ServerResult<Json<ListEntriesResponse>> {
    // 404 for unknown sheets rather than an empty list
    let sheet = state.storage.get_sheet(&sheet_id).await?;

    let entries = state.storage.list_entries(&sheet.id).await?;
    let count = entries.len();

    Ok(Json(ListEntriesResponse { entries, count }))
}
