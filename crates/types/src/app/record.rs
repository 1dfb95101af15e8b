// Path: crates/types/src/app/record.rs
//! The persisted commit-reveal record.

use parity_scale_codec::{Decode, Encode};

/// The lifecycle state of an [`EncryptedAccount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Public key, nonce and ciphertext are published; the plaintext is still hidden.
    Committed,
    /// A shared key authenticated the ciphertext and the plaintext is stored.
    Revealed,
}

/// A committed ciphertext together with everything needed to open it later.
///
/// Created by `commit_value`, which sets `public_key`, `nonce` and `cipher_text`.
/// `reveal_value` fills in `plain_text` once, and only if the supplied shared
/// key authenticates the ciphertext.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq, Default)]
pub struct EncryptedAccount {
    /// The committer's 32-byte X25519 public key. Also the PDA seed.
    pub public_key: Vec<u8>,
    /// The 24-byte XSalsa20 nonce.
    pub nonce: Vec<u8>,
    /// Poly1305 tag followed by the encrypted payload.
    pub cipher_text: Vec<u8>,
    /// The decrypted payload; empty until revealed.
    pub plain_text: Vec<u8>,
}

impl EncryptedAccount {
    /// Returns the lifecycle state of the record.
    pub fn status(&self) -> RecordStatus {
        // Commits with an empty payload are rejected, so a non-empty
        // plaintext is the reveal marker.
        if self.plain_text.is_empty() {
            RecordStatus::Committed
        } else {
            RecordStatus::Revealed
        }
    }

    /// True once the plaintext has been disclosed.
    pub fn is_revealed(&self) -> bool {
        self.status() == RecordStatus::Revealed
    }
}
