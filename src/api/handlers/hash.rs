//! Hash generation handler
//!
//! Computes an attendance hash for caller-supplied entry data. Kept for
//! interoperability with clients of the original serverless function.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::dto::{HashRequest, HashResponse};
use crate::api::state::AppState;
use crate::error::ServerResult;
use crate::receipt::{generate_attendance_hash, HashableEntry};

/// POST /v1/hash - Compute the hash for caller-supplied entry data
///
/// Missing required fields fail fast with 400 MISSING_FIELD.
pub async fn generate_hash(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HashRequest>,
) -> ServerResult<Json<HashResponse>> {
    let data = req.entry_data;

    let mut builder = HashableEntry::builder()
        .email(data.email)
        .phone(data.phone)
        .rank(data.rank)
        .badge_number(data.badge_number)
        .unit(data.unit)
        .age(data.age);

    if let Some(id) = data.id {
        builder = builder.id(id);
    }
    if let Some(sheet_id) = data.sheet_id {
        builder = builder.sheet_id(sheet_id);
    }
    if let Some(first_name) = data.first_name {
        builder = builder.first_name(first_name);
    }
    if let Some(last_name) = data.last_name {
        builder = builder.last_name(last_name);
    }
    if let Some(timestamp) = data.timestamp {
        builder = builder.timestamp(timestamp);
    }
    if let Some(created_at) = data.created_at {
        builder = builder.created_at(created_at);
    }

    let entry = builder.build()?;
    let hash = generate_attendance_hash(&entry, state.digest.as_ref())?;

    Ok(Json(HashResponse {
        hash,
        algorithm: state.digest.name(),
    }))
}
