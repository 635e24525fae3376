use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - check_id
/// - code
/// - path (repo-relative)
/// - reason
pub fn fingerprint_for_violation(check_id: &str, code: &str, path: &str, reason: &str) -> String {
    let canonical = [check_id, code, path, reason].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
