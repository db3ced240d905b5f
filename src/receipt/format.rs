//! Receipt formatting helpers

/// Strip all whitespace from a candidate receipt string
pub fn clean_hash(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Format a hash for display: one space every 8 characters.
///
/// Reversible by stripping whitespace (see [`clean_hash`]).
pub fn format_hash_for_display(hash: &str) -> String {
    hash.as_bytes()
        .chunks(8)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short form for compact display: first 16 characters.
///
/// Never used for verification; that always requires the full hash.
pub fn short_hash(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}

/// Syntactic check: after stripping whitespace, exactly 64 hex characters.
///
/// Says nothing about whether the hash corresponds to any stored record.
pub fn is_valid_hash_format(raw: &str) -> bool {
    let clean = clean_hash(raw);
    clean.len() == 64 && clean.chars().all(|c| c.is_ascii_hexdigit())
}
