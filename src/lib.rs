//! muster-server library exports (for testing)

pub mod api;
pub mod config;
pub mod error;
pub mod receipt;
pub mod storage;
pub mod traits;

// Re-exports
pub use error::{ServerError, ServerResult};
pub use storage::SqliteStore;
pub use traits::{AttendanceEntry, MusterSheet, NewEntry, NewSheet, Storage};
