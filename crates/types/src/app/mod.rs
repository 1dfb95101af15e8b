// Path: crates/types/src/app/mod.rs
//! Core application-level data structures.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

mod record;
mod transaction;

pub use record::*;
pub use transaction::*;

/// A 32-byte account address.
///
/// Wallet addresses are ed25519 public keys. Program-derived addresses are
/// hashes that deliberately fall off the ed25519 curve, so no private key
/// exists for them. Addresses are displayed in base58.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 32]);

/// The fixed address of the built-in system program (account allocator).
pub const SYSTEM_PROGRAM_ID: Address = Address([0u8; 32]);

impl Address {
    /// Creates an address from a byte slice, failing unless it is exactly 32 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, String> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| format!("address must be 32 bytes, got {}", bytes.len()))?;
        Ok(Self(arr))
    }

    /// Returns the raw address bytes.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| format!("invalid base58 address '{}': {}", s, e))?;
        Self::try_from_slice(&bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// The chain-level wrapper around every account.
///
/// `data` is opaque to the chain; only the `owner` program interprets it.
/// Plain wallets are owned by the system program and carry no data.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq, Default)]
pub struct AccountInfo {
    /// The program allowed to modify `data`.
    pub owner: Address,
    /// Balance in lamports.
    pub lamports: u64,
    /// Bytes reserved for `data` when the account was allocated.
    pub space: u32,
    /// Program-defined account contents. Never longer than `space`.
    pub data: Vec<u8>,
}

impl AccountInfo {
    /// A data-less system account holding only a balance.
    pub fn wallet(lamports: u64) -> Self {
        Self {
            owner: SYSTEM_PROGRAM_ID,
            lamports,
            space: 0,
            data: Vec::new(),
        }
    }
}
