//! Response DTOs

use serde::Serialize;

use crate::receipt::IssuedReceipt;
use crate::traits::{AttendanceEntry, MusterSheet};

/// Response for POST /v1/sheets/{id}/entries
#[derive(Debug, Serialize)]
pub struct SubmitEntryResponse {
    /// The stored entry (attendance is recorded even without a receipt)
    pub entry: AttendanceEntry,

    /// Receipt, when the attach phase succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<IssuedReceipt>,

    /// Where a receipt holder can verify it later
    pub verify_url: String,
}

/// Response for POST /v1/verify
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// "valid", "not_found", or "tampered"
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<AttendanceEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<MusterSheet>,
}

/// Response for GET /v1/sheets/{id}/entries
#[derive(Debug, Serialize)]
pub struct ListEntriesResponse {
    pub entries: Vec<AttendanceEntry>,
    pub count: usize,
}

/// Response for POST /v1/hash
#[derive(Debug, Serialize)]
pub struct HashResponse {
    /// 64-character lowercase hex hash
    pub hash: String,

    /// Digest strategy that produced it
    pub algorithm: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,

    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Machine-readable error code
    pub code: String,

    /// Whether the error is recoverable (client can retry)
    pub recoverable: bool,

    /// Additional error details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
