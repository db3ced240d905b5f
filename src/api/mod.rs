//! HTTP API

mod error;
pub mod dto;
pub mod handlers;
pub mod middleware;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;
