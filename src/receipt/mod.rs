//! Attendance receipt module
//!
//! Derives a deterministic fingerprint ("attendance hash") for a stored
//! sign-in entry, formats it for display, and verifies receipt strings
//! against stored records.

mod canonical;
mod digest;
mod format;
mod generate;
mod verify;

pub(crate) use canonical::canonical_created_at;
pub use canonical::{HashableEntry, HashableEntryBuilder, RECEIPT_SALT};
pub use digest::{select_digest, DigestKind, DigestStrategy, Fallback32Digest, Sha256Digest};
pub use format::{clean_hash, format_hash_for_display, is_valid_hash_format, short_hash};
pub use generate::{
    generate_attendance_hash, issue_receipt, verify_attendance_hash, IssuedReceipt,
};
pub use verify::{verify_receipt, VerificationOutcome};
