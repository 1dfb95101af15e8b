// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state keys.
//!
//! These constants are the single source of truth for where the chain keeps
//! its accounts and bookkeeping in the state store.

use crate::app::Address;

/// The state key prefix for every account (`AccountInfo`), keyed by address.
pub const ACCOUNT_INFO_PREFIX: &[u8] = b"account::info::";
/// The state key for the current block height.
pub const BLOCK_HEIGHT_KEY: &[u8] = b"system::height";
/// The state key prefix for processed transaction signatures (replay protection).
pub const PROCESSED_SIGNATURE_PREFIX: &[u8] = b"system::sig::";

/// Builds the full state key for an account.
pub fn account_info_key(address: &Address) -> Vec<u8> {
    [ACCOUNT_INFO_PREFIX, address.as_ref()].concat()
}

/// Recovers the address from a full account state key, if the key is one.
pub fn address_from_account_key(key: &[u8]) -> Option<Address> {
    let raw = key.strip_prefix(ACCOUNT_INFO_PREFIX)?;
    let bytes: [u8; 32] = raw.try_into().ok()?;
    Some(Address(bytes))
}
