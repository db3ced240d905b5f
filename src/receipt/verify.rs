//! Receipt verification workflow
//!
//! Given a user-supplied receipt string: strip whitespace, validate the
//! format, look up the stored entry carrying that hash, then recompute
//! the hash from the entry's own fields. The three outcomes are data,
//! not errors: "not found" is a user problem (typo, stale link), while
//! "tampered" means a stored row no longer recomputes to its attached
//! hash, which should never happen and is surfaced distinctly.

use crate::error::{ServerError, ServerResult};
use crate::receipt::canonical::HashableEntry;
use crate::receipt::digest::DigestStrategy;
use crate::receipt::format::{clean_hash, is_valid_hash_format};
use crate::receipt::generate::verify_attendance_hash;
use crate::traits::{AttendanceEntry, MusterSheet, Storage};

/// Tri-state result of verifying a receipt string
#[derive(Debug)]
pub enum VerificationOutcome {
    /// Record found and the hash recomputes from its fields
    Valid {
        entry: AttendanceEntry,
        /// Owning sheet, for display; verification itself never depends on it
        sheet: Option<MusterSheet>,
    },

    /// No stored record carries this hash
    NotFound,

    /// Record found but its fields no longer recompute to the stored hash
    Tampered { entry: AttendanceEntry },
}

/// Verify a user-supplied receipt string against the store.
///
/// A syntactically malformed receipt is rejected with `InvalidHash`
/// before any lookup happens, so the caller can report it distinctly
/// from "not found".
pub async fn verify_receipt(
    storage: &dyn Storage,
    digest: &dyn DigestStrategy,
    raw: &str,
) -> ServerResult<VerificationOutcome> {
    let clean = clean_hash(raw);
    if !is_valid_hash_format(&clean) {
        return Err(ServerError::InvalidHash(
            "receipt must be 64 hexadecimal characters".to_string(),
        ));
    }

    let Some(entry) = storage.find_entry_by_hash(&clean).await? else {
        return Ok(VerificationOutcome::NotFound);
    };

    let hashable = HashableEntry::from_entry(&entry);
    if verify_attendance_hash(&clean, &hashable, digest)? {
        let sheet = storage.get_sheet(&entry.sheet_id).await.ok();
        Ok(VerificationOutcome::Valid { entry, sheet })
    } else {
        tracing::error!(
            entry_id = %entry.id,
            sheet_id = %entry.sheet_id,
            "stored entry does not recompute to its attached hash"
        );
        Ok(VerificationOutcome::Tampered { entry })
    }
}
