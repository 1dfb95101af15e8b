// Path: crates/crypto/src/kem/x25519/mod.rs
//! X25519 key agreement for NaCl `box`.
//!
//! `SharedKey::derive` is `crypto_box_beforenm`: the raw X25519 shared point
//! is passed through HSalsa20 with an all-zero input block. The result is the
//! symmetric key a record's ciphertext is sealed under.

use crate::error::CryptoError;
use rand::rngs::OsRng;
use salsa20::cipher::consts::U10;
use salsa20::cipher::generic_array::GenericArray;
use salsa20::hsalsa;
use std::fmt;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

/// Length of X25519 public and secret keys.
pub const KEY_LENGTH: usize = 32;

/// An X25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxPublicKey(pub [u8; KEY_LENGTH]);

impl BoxPublicKey {
    /// Parses a public key from exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self(to_key_array(bytes, "public key")?))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for BoxPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxPublicKey({})", hex::encode(self.0))
    }
}

/// An X25519 secret key, wiped on drop.
#[derive(Clone)]
pub struct BoxSecretKey(Zeroizing<[u8; KEY_LENGTH]>);

impl BoxSecretKey {
    /// Parses a secret key from exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self(Zeroizing::new(to_key_array(bytes, "secret key")?)))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for BoxSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxSecretKey(..)")
    }
}

/// An X25519 key pair for sealing and opening boxes.
#[derive(Clone, Debug)]
pub struct BoxKeyPair {
    /// The public half, safe to publish.
    pub public_key: BoxPublicKey,
    /// The secret half.
    pub secret_key: BoxSecretKey,
}

impl BoxKeyPair {
    /// Generates a fresh key pair from the OS RNG.
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        Self::from_static(secret)
    }

    /// Rebuilds a key pair from its 32-byte secret.
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self, CryptoError> {
        let bytes = to_key_array(secret, "secret key")?;
        Ok(Self::from_static(StaticSecret::from(bytes)))
    }

    fn from_static(secret: StaticSecret) -> Self {
        let public = PublicKey::from(&secret);
        Self {
            public_key: BoxPublicKey(public.to_bytes()),
            secret_key: BoxSecretKey(Zeroizing::new(secret.to_bytes())),
        }
    }

    /// Precomputes the key shared with `their_public`.
    pub fn shared_key(&self, their_public: &BoxPublicKey) -> SharedKey {
        SharedKey::derive(their_public.as_bytes(), self.secret_key.as_bytes())
    }
}

/// A precomputed NaCl box key, wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedKey(Zeroizing<[u8; KEY_LENGTH]>);

impl SharedKey {
    /// Derives the box key from raw key bytes.
    ///
    /// Any 32 bytes are accepted for either argument, matching NaCl. Swapping
    /// a public and a secret key still yields a key, just the wrong one.
    pub fn derive(their_public: &[u8; KEY_LENGTH], my_secret: &[u8; KEY_LENGTH]) -> Self {
        let secret = StaticSecret::from(*my_secret);
        let point = secret.diffie_hellman(&PublicKey::from(*their_public));
        let key = hsalsa::<U10>(
            GenericArray::from_slice(point.as_bytes()),
            &GenericArray::default(),
        );
        let mut out = Zeroizing::new([0u8; KEY_LENGTH]);
        out.copy_from_slice(key.as_slice());
        Self(out)
    }

    /// Derives the box key from slices, validating their lengths.
    pub fn derive_from_slices(their_public: &[u8], my_secret: &[u8]) -> Result<Self, CryptoError> {
        let public = to_key_array(their_public, "public key")?;
        let secret = Zeroizing::new(to_key_array(my_secret, "secret key")?);
        Ok(Self::derive(&public, &secret))
    }

    /// Wraps an existing 32-byte key.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self(Zeroizing::new(to_key_array(bytes, "shared key")?)))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey(..)")
    }
}

fn to_key_array(bytes: &[u8], what: &str) -> Result<[u8; KEY_LENGTH], CryptoError> {
    bytes.try_into().map_err(|_| {
        CryptoError::InvalidKey(format!(
            "{} must be {} bytes, got {}",
            what,
            KEY_LENGTH,
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests;
