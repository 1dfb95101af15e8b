// Path: crates/crypto/src/aead/mod.rs
//! NaCl `box` sealing and opening over XSalsa20-Poly1305.
//!
//! Ciphertexts use the NaCl layout: the 16-byte Poly1305 tag first, then the
//! encrypted payload. They are interchangeable with `tweetnacl`'s `box`.

use crate::error::CryptoError;
use crate::kem::x25519::{SharedKey, KEY_LENGTH};
use ae_types::{NONCE_LENGTH, TAG_LENGTH};
use rand::rngs::OsRng;
use rand::RngCore;
use xsalsa20poly1305::aead::{Aead, KeyInit};
use xsalsa20poly1305::{Key, Nonce, XSalsa20Poly1305};

/// Returns a fresh random 24-byte nonce.
pub fn random_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

fn cipher(key: &SharedKey) -> XSalsa20Poly1305 {
    XSalsa20Poly1305::new(Key::from_slice(key.as_bytes()))
}

fn check_nonce(nonce: &[u8]) -> Result<&Nonce, CryptoError> {
    if nonce.len() != NONCE_LENGTH {
        return Err(CryptoError::InvalidNonce {
            expected: NONCE_LENGTH,
            got: nonce.len(),
        });
    }
    Ok(Nonce::from_slice(nonce))
}

/// Seals `plain_text` under a precomputed box key.
pub fn seal_with_shared_key(
    key: &SharedKey,
    nonce: &[u8],
    plain_text: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let nonce = check_nonce(nonce)?;
    cipher(key)
        .encrypt(nonce, plain_text)
        .map_err(|_| CryptoError::Encryption)
}

/// Seals `plain_text` for `their_public` with `my_secret`, like NaCl `box`.
pub fn seal(
    plain_text: &[u8],
    nonce: &[u8],
    their_public: &[u8; KEY_LENGTH],
    my_secret: &[u8; KEY_LENGTH],
) -> Result<Vec<u8>, CryptoError> {
    let key = SharedKey::derive(their_public, my_secret);
    seal_with_shared_key(&key, nonce, plain_text)
}

/// Authenticates and decrypts a box under a precomputed key.
///
/// Fails with [`CryptoError::Authentication`] if the key is wrong or the
/// ciphertext, tag or nonce were altered.
pub fn open_with_shared_key(
    key: &SharedKey,
    nonce: &[u8],
    cipher_text: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let nonce = check_nonce(nonce)?;
    if cipher_text.len() < TAG_LENGTH {
        return Err(CryptoError::Authentication);
    }
    cipher(key)
        .decrypt(nonce, cipher_text)
        .map_err(|_| CryptoError::Authentication)
}

#[cfg(test)]
mod tests;
