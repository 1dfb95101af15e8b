// Path: crates/crypto/src/sign/eddsa/mod.rs
//! Ed25519 wallet keys. A wallet's address is its verifying key.

use crate::error::CryptoError;
use ae_types::app::Address;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use zeroize::Zeroizing;

/// An ed25519 signing key pair.
#[derive(Clone)]
pub struct WalletKeyPair {
    signing_key: SigningKey,
}

impl WalletKeyPair {
    /// Generates a new key pair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Rebuilds a key pair from its 32-byte seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, CryptoError> {
        let seed: [u8; 32] = seed.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!("ed25519 seed must be 32 bytes, got {}", seed.len()))
        })?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    /// The wallet address (the verifying key).
    pub fn address(&self) -> Address {
        Address(self.signing_key.verifying_key().to_bytes())
    }

    /// The 32-byte seed.
    pub fn seed(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }

    /// Signs a message.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for WalletKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletKeyPair({})", self.address())
    }
}

/// Verifies `signature` over `message` by the wallet at `address`.
pub fn verify(address: &Address, message: &[u8], signature: &[u8; 64]) -> Result<(), CryptoError> {
    let key = VerifyingKey::from_bytes(&address.0)
        .map_err(|e| CryptoError::InvalidKey(format!("not an ed25519 key: {}", e)))?;
    key.verify_strict(message, &Signature::from_bytes(signature))
        .map_err(|_| CryptoError::InvalidSignature)
}

#[cfg(test)]
mod tests;
