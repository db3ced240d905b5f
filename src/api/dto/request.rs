//! Request DTOs

use serde::Deserialize;

/// Request body for POST /v1/sheets
#[derive(Debug, Deserialize)]
pub struct CreateSheetRequest {
    /// Event title
    pub title: String,

    /// Optional event description
    #[serde(default)]
    pub description: Option<String>,

    /// Sign-in form field names (JSON array)
    #[serde(default)]
    pub required_fields: Option<serde_json::Value>,
}

/// Request body for POST /v1/sheets/{id}/entries
///
/// Field names mirror the record store's columns.
#[derive(Debug, Deserialize)]
pub struct SubmitEntryRequest {
    pub first_name: String,
    pub last_name: String,

    /// ISO 8601 sign-in instant, stored verbatim
    pub timestamp: String,

    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub badge_number: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Request body for POST /v1/verify
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Receipt string, possibly containing display spacing
    pub receipt: String,
}

/// Request body for POST /v1/hash
///
/// Keys are camelCase: this endpoint keeps the wire shape of the original
/// hash-generation function so existing clients interoperate.
#[derive(Debug, Deserialize)]
pub struct HashRequest {
    #[serde(rename = "entryData")]
    pub entry_data: HashEntryData,
}

/// Loosely-typed entry data for the hash endpoint; required fields are
/// enforced by the hashable-view builder, not by deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashEntryData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sheet_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub badge_number: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}
