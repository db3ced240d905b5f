//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::receipt::DigestStrategy;
use crate::traits::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Record store
    pub storage: Arc<dyn Storage>,

    /// Digest strategy selected at startup
    pub digest: Arc<dyn DigestStrategy>,

    /// Bearer tokens for sheet-owner routes (None = open mode)
    pub access_tokens: Option<Vec<String>>,

    /// Base URL used when building receipt lookup links
    pub base_url: String,
}
