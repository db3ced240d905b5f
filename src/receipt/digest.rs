//! Digest strategies for receipt hashing
//!
//! Two interchangeable strategies over the same canonical string: the
//! real SHA-256 digest, and a weak 32-bit rolling hash kept only for
//! degraded environments where a cryptographic primitive is unavailable.
//! The strategy is picked once at startup; selecting the fallback is a
//! silent weakening of the receipt's guarantees, so it is logged loudly.

use std::sync::Arc;

use clap::ValueEnum;
use sha2::{Digest, Sha256};

/// A digest over the canonical entry string.
///
/// Implementations must be pure: same input, same 64-character lowercase
/// output, no side effects.
pub trait DigestStrategy: Send + Sync {
    /// Digest the canonical string into a 64-character lowercase hex string
    fn digest_hex(&self, canonical: &str) -> String;

    /// Whether this strategy is collision resistant
    fn is_cryptographic(&self) -> bool;

    /// Strategy name for logs and the hash endpoint response
    fn name(&self) -> &'static str;
}

/// SHA-256 digest (the normal path)
#[derive(Debug, Default)]
pub struct Sha256Digest;

impl DigestStrategy for Sha256Digest {
    fn digest_hex(&self, canonical: &str) -> String {
        hex::encode(Sha256::digest(canonical.as_bytes()))
    }

    fn is_cryptographic(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}

/// Non-cryptographic 32-bit rolling hash fallback
///
/// Multiply-by-31-and-add over UTF-16 code units with wraparound 32-bit
/// signed arithmetic, absolute-valued, hex-encoded, right-padded with
/// '0' to 64 characters. NOT collision resistant; exists only to keep
/// receipts functional where SHA-256 is unavailable.
#[derive(Debug, Default)]
pub struct Fallback32Digest;

impl DigestStrategy for Fallback32Digest {
    fn digest_hex(&self, canonical: &str) -> String {
        let mut h: i32 = 0;
        for unit in canonical.encode_utf16() {
            h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
        }
        let mut out = format!("{:0<64}", format!("{:x}", h.unsigned_abs()));
        out.truncate(64);
        out
    }

    fn is_cryptographic(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "fallback-32"
    }
}

/// Digest strategy selector (CLI/env value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DigestKind {
    /// SHA-256 (default)
    #[value(name = "sha256")]
    Sha256,
    /// Weak 32-bit rolling hash for degraded environments
    #[value(name = "fallback-32")]
    Fallback32,
}

/// Select the digest strategy at startup.
///
/// Warns when the fallback is chosen, since receipts issued with it
/// carry no integrity guarantee.
pub fn select_digest(kind: DigestKind) -> Arc<dyn DigestStrategy> {
    match kind {
        DigestKind::Sha256 => Arc::new(Sha256Digest),
        DigestKind::Fallback32 => {
            tracing::warn!(
                "using non-cryptographic fallback digest: receipt hashes are NOT collision \
                 resistant"
            );
            Arc::new(Fallback32Digest)
        }
    }
}
