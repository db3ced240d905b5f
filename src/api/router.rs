//! Router setup and configuration

use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};

use crate::api::handlers;
use crate::api::middleware::auth_middleware;
use crate::api::state::AppState;

/// Create the API router
///
/// Attendee-facing routes (sheet lookup, sign-in, verification, hash)
/// are always open. Sheet-owner routes (sheet creation, entry review)
/// require a Bearer token when access tokens are configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_v1 = Router::new()
        .route("/sheets/:id", get(handlers::get_sheet))
        .route("/sheets/:id/entries", post(handlers::submit_entry))
        .route("/verify", post(handlers::verify_receipt))
        .route("/hash", post(handlers::generate_hash));

    let api_v1 = if state.access_tokens.is_some() {
        let auth = middleware::from_fn_with_state(state.clone(), auth_middleware);
        api_v1
            .route(
                "/sheets",
                post(handlers::create_sheet).route_layer(auth.clone()),
            )
            .route(
                "/sheets/:id/entries",
                get(handlers::list_entries).route_layer(auth),
            )
    } else {
        api_v1
            .route("/sheets", post(handlers::create_sheet))
            .route("/sheets/:id/entries", get(handlers::list_entries))
    };

    Router::new()
        .nest("/v1", api_v1)
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
