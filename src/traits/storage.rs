//! Async storage trait definition

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ServerResult;

/// A muster sheet (event/roster definition)
#[derive(Debug, Clone, Serialize)]
pub struct MusterSheet {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// Optional event description
    pub description: Option<String>,

    /// Sign-in form field names chosen at creation (JSON array)
    pub required_fields: Option<serde_json::Value>,

    /// When the sheet was created
    pub created_at: DateTime<Utc>,
}

/// An attendance entry (one sign-in submission)
///
/// `id` and `created_at` are assigned by the store at insert time and are
/// immutable afterwards. `attendance_hash` is attached exactly once by the
/// second phase of the two-phase write; the row is never mutated again.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    /// Unique identifier (UUID v4), store-assigned
    pub id: Uuid,

    /// Owning muster sheet
    pub sheet_id: Uuid,

    /// Attendee first name
    pub first_name: String,

    /// Attendee last name
    pub last_name: String,

    /// Client-supplied ISO 8601 sign-in instant, stored verbatim
    pub timestamp: String,

    /// Optional contact and roster fields
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rank: Option<String>,
    pub badge_number: Option<String>,
    pub unit: Option<String>,
    pub age: Option<u32>,

    /// Receipt hash, attached after insertion (None until phase two)
    pub attendance_hash: Option<String>,

    /// When the row was inserted, store-assigned
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a muster sheet
#[derive(Debug, Clone)]
pub struct NewSheet {
    pub title: String,
    pub description: Option<String>,
    pub required_fields: Option<serde_json::Value>,
}

/// Parameters for inserting an attendance entry (phase one)
///
/// Deliberately has no `id`, `created_at`, or `attendance_hash`: those do
/// not exist before the store assigns them, so no hashable view can be
/// built from this type.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub sheet_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub timestamp: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rank: Option<String>,
    pub badge_number: Option<String>,
    pub unit: Option<String>,
    pub age: Option<u32>,
}

/// Storage abstraction over the record store
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create a new muster sheet
    async fn create_sheet(&self, params: NewSheet) -> ServerResult<MusterSheet>;

    /// Get a sheet by ID
    async fn get_sheet(&self, id: &Uuid) -> ServerResult<MusterSheet>;

    /// Insert a new attendance entry (phase one of the two-phase write)
    ///
    /// Assigns `id` and `created_at`; `attendance_hash` starts NULL.
    async fn insert_entry(&self, params: NewEntry) -> ServerResult<AttendanceEntry>;

    /// Attach the receipt hash to a stored entry (phase two)
    ///
    /// Fails with a corruption error if the entry already has a hash.
    async fn attach_hash(&self, entry_id: &Uuid, hash: &str) -> ServerResult<()>;

    /// Get an entry by its ID
    async fn get_entry(&self, id: &Uuid) -> ServerResult<AttendanceEntry>;

    /// Find an entry by its attached receipt hash
    async fn find_entry_by_hash(&self, hash: &str) -> ServerResult<Option<AttendanceEntry>>;

    /// List all entries for a sheet, oldest first
    async fn list_entries(&self, sheet_id: &Uuid) -> ServerResult<Vec<AttendanceEntry>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> ServerResult<()>;
}
