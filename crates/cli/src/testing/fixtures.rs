// Path: crates/cli/src/testing/fixtures.rs

use ae_crypto::aead::{random_nonce, seal};
use ae_crypto::kem::x25519::{BoxKeyPair, SharedKey};
use ae_types::NONCE_LENGTH;
use anyhow::Result;

/// A value sealed by `sender` for a recipient, ready to commit.
#[derive(Debug, Clone)]
pub struct SealedValue {
    /// The sender's public key; the record is derived from it.
    pub public_key: [u8; 32],
    /// The nonce the value was sealed under.
    pub nonce: [u8; NONCE_LENGTH],
    /// `tag || ciphertext`, as stored on chain.
    pub cipher_text: Vec<u8>,
    /// The original value, for comparing against a reveal.
    pub plain_text: Vec<u8>,
}

/// Seals `plain_text` from `sender` to `recipient` under a random nonce.
pub fn seal_for(sender: &BoxKeyPair, recipient: &BoxKeyPair, plain_text: &[u8]) -> Result<SealedValue> {
    let nonce = random_nonce();
    let cipher_text = seal(
        plain_text,
        &nonce,
        recipient.public_key.as_bytes(),
        sender.secret_key.as_bytes(),
    )?;
    Ok(SealedValue {
        public_key: sender.public_key.0,
        nonce,
        cipher_text,
        plain_text: plain_text.to_vec(),
    })
}

/// The key produced by passing the recipient's secret where the sender's
/// public key belongs (and vice versa). It never opens the box.
pub fn forged_shared_key(sender: &BoxKeyPair, recipient: &BoxKeyPair) -> SharedKey {
    SharedKey::derive(recipient.secret_key.as_bytes(), sender.public_key.as_bytes())
}
