//! Muster sheet handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::dto::CreateSheetRequest;
use crate::api::state::AppState;
use crate::error::{ServerError, ServerResult};
use crate::traits::{MusterSheet, NewSheet};

/// POST /v1/sheets - Create a muster sheet
pub async fn create_sheet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSheetRequest>,
) -> ServerResult<(StatusCode, Json<MusterSheet>)> {
    if req.title.trim().is_empty() {
        return Err(ServerError::InvalidArgument("title must not be empty".into()));
    }

    let sheet = state
        .storage
        .create_sheet(NewSheet {
            title: req.title,
            description: req.description,
            required_fields: req.required_fields,
        })
        .await?;

    tracing::info!(sheet_id = %sheet.id, title = %sheet.title, "sheet created");

    Ok((StatusCode::CREATED, Json(sheet)))
}

/// GET /v1/sheets/{id} - Fetch a sheet (attendees load this to sign in)
pub async fn get_sheet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<MusterSheet>> {
    let sheet = state.storage.get_sheet(&id).await?;
    Ok(Json(sheet))
}
