//! Receipt hash generation and the attach-hash write phase

use crate::error::ServerResult;
use crate::receipt::canonical::HashableEntry;
use crate::receipt::digest::DigestStrategy;
use crate::receipt::format::{format_hash_for_display, short_hash};
use crate::traits::{AttendanceEntry, Storage};

/// Generate the attendance hash for an entry.
///
/// Pure function of the canonical entry form plus the salt constant:
/// 64-character lowercase hex, no side effects.
pub fn generate_attendance_hash(
    entry: &HashableEntry,
    digest: &dyn DigestStrategy,
) -> ServerResult<String> {
    Ok(digest.digest_hex(&entry.canonical_string()?))
}

/// Verify a candidate hash against an entry.
///
/// Recomputes and compares byte-for-byte. A malformed candidate is just
/// a non-match, never an error.
pub fn verify_attendance_hash(
    candidate: &str,
    entry: &HashableEntry,
    digest: &dyn DigestStrategy,
) -> ServerResult<bool> {
    Ok(generate_attendance_hash(entry, digest)? == candidate)
}

/// A receipt issued to the submitting attendee
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssuedReceipt {
    /// Full 64-character hash (the value a QR code encodes)
    pub hash: String,

    /// Human-readable form, spaced every 8 characters
    pub display: String,

    /// First 16 characters, for compact display only
    pub short: String,
}

impl IssuedReceipt {
    fn new(hash: String) -> Self {
        Self {
            display: format_hash_for_display(&hash),
            short: short_hash(&hash).to_string(),
            hash,
        }
    }
}

/// Phase two of the two-phase write: compute the hash from the stored
/// entry's server-assigned fields and attach it to the row.
///
/// Attach failure is non-fatal to the submission: the attendance record
/// itself already exists, only the portable receipt is missing. It is
/// logged distinctly so operators can tell it apart from a failed
/// submission.
pub async fn issue_receipt(
    storage: &dyn Storage,
    digest: &dyn DigestStrategy,
    entry: &AttendanceEntry,
) -> Option<IssuedReceipt> {
    let hashable = HashableEntry::from_entry(entry);
    let hash = match generate_attendance_hash(&hashable, digest) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!(entry_id = %entry.id, error = %e, "receipt hash generation failed; entry stored without receipt");
            return None;
        }
    };

    match storage.attach_hash(&entry.id, &hash).await {
        Ok(()) => Some(IssuedReceipt::new(hash)),
        Err(e) => {
            tracing::warn!(entry_id = %entry.id, error = %e, "receipt hash attach failed; entry stored without receipt");
            None
        }
    }
}
