//! Opaque per-user identifier for the TypingDNA APIs.

use sha2::{Digest, Sha256};

/// Derives the identifier under which a user is known to TypingDNA.
///
/// The identifier is the lowercase SHA-256 hex digest of the tenant
/// qualified username `username@tenantDomain`. It is deterministic, serves
/// only as an external correlation key, and is never reversible to the
/// original username. No case or Unicode normalization is applied; the
/// inputs are hashed exactly as the host framework supplies them.
pub fn typingdna_user_id(username: &str, tenant_domain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b"@");
    hasher.update(tenant_domain.as_bytes());
    hex::encode(hasher.finalize())
}
