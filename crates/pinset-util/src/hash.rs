use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Checksum of manifest text as recorded in lockfiles.
///
/// Line endings are normalized so a checkout with CRLF endings hashes the
/// same as the LF original.
pub fn manifest_checksum(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    sha256_bytes(normalized.as_bytes())
}
