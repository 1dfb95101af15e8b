// Path: crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for all on-chain state.
//!
//! This module provides simple wrappers around `parity-scale-codec` (SCALE).
//! Every account, instruction and signed message goes through these two
//! functions so that the bytes that are hashed, signed and stored are the same
//! everywhere in the workspace.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into its canonical SCALE byte representation.
///
/// This function should be used for all data that is written to state or
/// included in signed transaction messages.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from a canonical byte representation using SCALE codec.
///
/// Trailing bytes are rejected, so a value decodes from exactly one encoding.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}
