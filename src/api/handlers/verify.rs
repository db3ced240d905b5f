//! Receipt verification handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::dto::{VerifyRequest, VerifyResponse};
use crate::api::state::AppState;
use crate::error::ServerResult;
use crate::receipt::{self, VerificationOutcome};

/// POST /v1/verify - Verify a receipt string
///
/// All three outcomes are 200s; a syntactically malformed receipt is a
/// 400 rejected before any lookup.
pub async fn verify_receipt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyRequest>,
) -> ServerResult<Json<VerifyResponse>> {
    let outcome =
        receipt::verify_receipt(state.storage.as_ref(), state.digest.as_ref(), &req.receipt)
            .await?;

    let response = match outcome {
        VerificationOutcome::Valid { entry, sheet } => VerifyResponse {
            status: "valid",
            entry: Some(entry),
            sheet,
        },
        VerificationOutcome::NotFound => VerifyResponse {
            status: "not_found",
            entry: None,
            sheet: None,
        },
        VerificationOutcome::Tampered { entry } => VerifyResponse {
            status: "tampered",
            entry: Some(entry),
            sheet: None,
        },
    };

    Ok(Json(response))
}
