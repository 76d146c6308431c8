//! Content hashing for analyzed strings

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 bytes of an already-trimmed value
pub(crate) fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
