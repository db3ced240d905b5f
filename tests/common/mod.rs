//! Common test utilities and fixtures
//!
//! Shared test infrastructure: app setup with in-memory storage, request
//! helpers, and custom assertions for receipt validation.

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;

// Re-export frequently used external types for convenience
pub use axum::body::Body;
pub use axum::http::{Request, StatusCode};
pub use std::sync::Arc;
pub use tower::ServiceExt;
