//! Bearer token authentication middleware

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::error::ServerError;

/// Authentication middleware for sheet-owner routes
///
/// Only applied when access tokens are configured.
/// Returns 401 if the token is missing or invalid.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(tokens) = state.access_tokens.as_ref() else {
        // Middleware is only wired up when tokens are configured
        return Ok(next.run(req).await);
    };

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(ServerError::AuthMissing)?;

    let auth_str = auth_header.to_str().map_err(|_| ServerError::AuthInvalid)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(ServerError::AuthInvalid)?;

    if !tokens.iter().any(|t| t == token) {
        return Err(ServerError::AuthInvalid);
    }

    Ok(next.run(req).await)
}
