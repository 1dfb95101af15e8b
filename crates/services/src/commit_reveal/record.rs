// Path: crates/services/src/commit_reveal/record.rs
//! Account data layout for [`EncryptedAccount`]: an 8-byte type
//! discriminator followed by the canonical encoding of the record.

use ae_crypto::algorithms::hash::account_discriminator;
use ae_types::app::{AccountInfo, EncryptedAccount};
use ae_types::codec;
use ae_types::error::ProgramError;
use ae_types::{DISCRIMINATOR_LENGTH, TAG_LENGTH};

/// The type name hashed into the discriminator.
pub const RECORD_TYPE_NAME: &str = "EncryptedAccount";

/// The discriminator that prefixes every encrypted record.
pub fn record_discriminator() -> [u8; DISCRIMINATOR_LENGTH] {
    account_discriminator(RECORD_TYPE_NAME)
}

/// Serializes a record into account data.
pub fn encode_record(record: &EncryptedAccount) -> Result<Vec<u8>, ProgramError> {
    let body = codec::to_bytes_canonical(record).map_err(ProgramError::InvalidAccountData)?;
    let mut data = Vec::with_capacity(DISCRIMINATOR_LENGTH + body.len());
    data.extend_from_slice(&record_discriminator());
    data.extend_from_slice(&body);
    Ok(data)
}

/// Parses account data, checking the discriminator first.
pub fn decode_record(data: &[u8]) -> Result<EncryptedAccount, ProgramError> {
    if data.len() < DISCRIMINATOR_LENGTH {
        return Err(ProgramError::InvalidAccountData(format!(
            "{} bytes is shorter than the discriminator",
            data.len()
        )));
    }
    let (tag, body) = data.split_at(DISCRIMINATOR_LENGTH);
    if tag != record_discriminator() {
        return Err(ProgramError::InvalidAccountData(
            "discriminator mismatch".into(),
        ));
    }
    codec::from_bytes_canonical(body).map_err(ProgramError::InvalidAccountData)
}

/// Fails unless `record` still fits in `space` bytes once its plaintext is
/// filled in. A successful open yields `cipher_text.len() - TAG_LENGTH` bytes.
pub(crate) fn ensure_revealable(
    record: &EncryptedAccount,
    space: u32,
) -> Result<(), ProgramError> {
    let plain_len = record.cipher_text.len().saturating_sub(TAG_LENGTH);
    let revealed = EncryptedAccount {
        plain_text: vec![0u8; plain_len],
        ..record.clone()
    };
    let needed = encode_record(&revealed)?.len();
    if needed > space as usize {
        return Err(ProgramError::AccountDataTooSmall { needed, space });
    }
    Ok(())
}

/// Writes `record` into `account`, failing if it exceeds the allocated space.
pub(crate) fn store_record(
    account: &mut AccountInfo,
    record: &EncryptedAccount,
) -> Result<(), ProgramError> {
    let data = encode_record(record)?;
    if data.len() > account.space as usize {
        return Err(ProgramError::AccountDataTooSmall {
            needed: data.len(),
            space: account.space,
        });
    }
    account.data = data;
    Ok(())
}
