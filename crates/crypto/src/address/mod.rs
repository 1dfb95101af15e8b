// Path: crates/crypto/src/address/mod.rs
//! Program-derived addresses.
//!
//! A PDA is `sha256(seed_0 || .. || seed_n || program_id || "ProgramDerivedAddress")`,
//! accepted only when the digest is *not* a valid compressed ed25519 point.
//! No private key can exist for such an address, so only the owning program
//! can sign for it.

use crate::algorithms::hash::sha256_concat;
use crate::error::CryptoError;
use ae_types::app::Address;
use curve25519_dalek::edwards::CompressedEdwardsY;

/// Maximum number of seeds, including the bump seed.
pub const MAX_SEEDS: usize = 16;
/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// True if the bytes decode to a point on the ed25519 curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Derives the address for exactly these seeds (the bump, if any, included).
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address, CryptoError> {
    if seeds.len() > MAX_SEEDS {
        return Err(CryptoError::InvalidSeeds(format!(
            "{} seeds exceeds the maximum of {}",
            seeds.len(),
            MAX_SEEDS
        )));
    }
    if let Some(seed) = seeds.iter().find(|s| s.len() > MAX_SEED_LEN) {
        return Err(CryptoError::InvalidSeeds(format!(
            "seed of {} bytes exceeds the maximum of {}",
            seed.len(),
            MAX_SEED_LEN
        )));
    }

    let mut parts: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 2);
    parts.extend_from_slice(seeds);
    parts.push(program_id.as_ref());
    parts.push(PDA_MARKER);
    let digest = sha256_concat(&parts);

    if is_on_curve(&digest) {
        return Err(CryptoError::OnCurve);
    }
    Ok(Address(digest))
}

/// Finds the canonical PDA for `seeds`: the first off-curve address found
/// when trying bump seeds from 255 downwards.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), CryptoError> {
    if seeds.len() >= MAX_SEEDS {
        return Err(CryptoError::InvalidSeeds(format!(
            "{} seeds leaves no room for a bump seed",
            seeds.len()
        )));
    }
    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut with_bump = seeds.to_vec();
        with_bump.push(&bump_seed);
        match create_program_address(&with_bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            Err(CryptoError::OnCurve) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(CryptoError::NoViableBump)
}
