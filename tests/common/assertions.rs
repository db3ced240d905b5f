//! Custom test assertions for receipt validation

use serde_json::Value;

/// Assert that a receipt JSON object has the expected structure:
/// full 64-char lowercase hex hash, display form that strips back to the
/// hash, and a short form of the first 16 characters.
pub fn assert_valid_receipt_structure(receipt: &Value) {
    assert!(receipt.is_object(), "Receipt should be a JSON object");

    let hash = receipt["hash"].as_str().expect("receipt.hash missing");
    assert_eq!(hash.len(), 64, "hash should be 64 characters");
    assert!(
        hash.chars().all(|c| c.is_ascii_hexdigit()),
        "hash should be hex"
    );
    assert_eq!(hash, hash.to_lowercase(), "hash should be lowercase");

    let display = receipt["display"].as_str().expect("receipt.display missing");
    assert_eq!(
        display.replace(' ', ""),
        hash,
        "display form should strip back to the hash"
    );

    let short = receipt["short"].as_str().expect("receipt.short missing");
    assert_eq!(short, &hash[..16], "short form should be first 16 chars");
}

/// Assert that an error body carries the expected machine-readable code
pub fn assert_error_code(body: &Value, code: &str) {
    assert_eq!(
        body["code"].as_str(),
        Some(code),
        "unexpected error body: {body}"
    );
}
