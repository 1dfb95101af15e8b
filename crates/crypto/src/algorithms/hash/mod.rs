// Path: crates/crypto/src/algorithms/hash/mod.rs
//! SHA-256 helpers.

use sha2::{Digest, Sha256};

/// Hashes a message with SHA-256.
pub fn sha256(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// Hashes the concatenation of several byte slices without allocating.
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The 8-byte type tag prefixed to program-owned account data.
///
/// Computed as the first eight bytes of `sha256("account:<TypeName>")`.
pub fn account_discriminator(type_name: &str) -> [u8; 8] {
    let digest = sha256_concat(&[b"account:", type_name.as_bytes()]);
    let mut out = [0u8; 8];
    for (o, d) in out.iter_mut().zip(digest.iter()) {
        *o = *d;
    }
    out
}
