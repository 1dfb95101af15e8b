// Path: crates/services/src/commit_reveal/mod.rs
//! The commit-reveal program.
//!
//! A committer seals a value with NaCl `box` and publishes the ciphertext in
//! an account derived from their X25519 public key. Anyone holding the
//! precomputed shared key can later open it on chain, which stores the
//! plaintext next to the ciphertext. A key that does not authenticate the
//! ciphertext fails the transaction and leaves the record untouched.

use ae_api::program::{InstructionAccounts, OnChainProgram};
use ae_api::state::{AccountStore, StateAccess};
use ae_api::transaction::context::TxContext;
use ae_crypto::aead::open_with_shared_key;
use ae_crypto::address::find_program_address;
use ae_crypto::error::CryptoError;
use ae_crypto::kem::x25519::SharedKey;
use ae_types::app::{AccountMeta, Address, EncryptedAccount, Instruction, SYSTEM_PROGRAM_ID};
use ae_types::codec;
use ae_types::error::ProgramError;
use ae_types::{NONCE_LENGTH, PUBLIC_KEY_LENGTH, SHARED_KEY_LENGTH, TAG_LENGTH};
use async_trait::async_trait;
use parity_scale_codec::{Decode, Encode};
use std::any::Any;

use crate::system::create_account_instruction;

mod record;

use record::{ensure_revealable, store_record};
pub use record::{decode_record, encode_record, record_discriminator, RECORD_TYPE_NAME};

/// Method name for [`CommitValueParams`].
pub const COMMIT_VALUE: &str = "commit_value@v1";
/// Method name for [`RevealValueParams`].
pub const REVEAL_VALUE: &str = "reveal_value@v1";

/// Parameters for `commit_value@v1`.
///
/// Accounts: `[payer (signer, writable), encrypted_account (writable), system_program]`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct CommitValueParams {
    /// The committer's X25519 public key (32 bytes).
    pub public_key: Vec<u8>,
    /// The XSalsa20 nonce the value was sealed with (24 bytes).
    pub nonce: Vec<u8>,
    /// The sealed value: tag followed by the encrypted payload.
    pub cipher_text: Vec<u8>,
}

/// Parameters for `reveal_value@v1`.
///
/// Accounts: `[encrypted_account (writable)]`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct RevealValueParams {
    /// The precomputed NaCl box key (32 bytes).
    pub shared_key: Vec<u8>,
}

/// The record address for a committer's public key, with its bump seed.
pub fn record_address(
    public_key: &[u8],
    program_id: &Address,
) -> Result<(Address, u8), CryptoError> {
    find_program_address(&[public_key], program_id)
}

/// Builds a `commit_value@v1` instruction targeting the public key's record.
pub fn commit_value_instruction(
    program_id: Address,
    payer: Address,
    params: CommitValueParams,
) -> Result<Instruction, ProgramError> {
    let (record, _) = record_address(&params.public_key, &program_id)?;
    Instruction::new(
        program_id,
        COMMIT_VALUE,
        &params,
        vec![
            AccountMeta::writable(payer, true),
            AccountMeta::writable(record, false),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
    .map_err(ProgramError::InvalidInstructionData)
}

/// Builds a `reveal_value@v1` instruction for the record at `record`.
pub fn reveal_value_instruction(
    program_id: Address,
    record: Address,
    shared_key: &[u8],
) -> Result<Instruction, ProgramError> {
    Instruction::new(
        program_id,
        REVEAL_VALUE,
        &RevealValueParams {
            shared_key: shared_key.to_vec(),
        },
        vec![AccountMeta::writable(record, false)],
    )
    .map_err(ProgramError::InvalidInstructionData)
}

fn check_length(field: &'static str, value: &[u8], expected: usize) -> Result<(), ProgramError> {
    if value.len() != expected {
        return Err(ProgramError::InvalidLength {
            field,
            expected,
            got: value.len(),
        });
    }
    Ok(())
}

/// Stores sealed values and opens them with a shared key.
#[derive(Debug, Clone)]
pub struct CommitRevealProgram {
    program_id: Address,
}

impl CommitRevealProgram {
    /// Creates the program, answering at `program_id`.
    pub fn new(program_id: Address) -> Self {
        Self { program_id }
    }

    async fn commit_value(
        &self,
        state: &mut dyn StateAccess,
        accounts: InstructionAccounts<'_>,
        params: CommitValueParams,
        ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        check_length("public_key", &params.public_key, PUBLIC_KEY_LENGTH)?;
        check_length("nonce", &params.nonce, NONCE_LENGTH)?;
        if params.cipher_text.len() <= TAG_LENGTH {
            return Err(ProgramError::InvalidLength {
                field: "cipher_text",
                expected: TAG_LENGTH + 1,
                got: params.cipher_text.len(),
            });
        }

        let payer = accounts.signer(0, ctx)?;
        accounts.writable(0)?;
        let target = accounts.writable(1)?;
        accounts.program(2, &SYSTEM_PROGRAM_ID)?;

        let (expected, bump) = record_address(&params.public_key, &self.program_id)?;
        if target != expected {
            return Err(ProgramError::InvalidSeeds {
                expected,
                got: target,
            });
        }
        if state.account_exists(&target)? {
            return Err(ProgramError::AccountAlreadyInUse(target));
        }

        let record = EncryptedAccount {
            public_key: params.public_key,
            nonce: params.nonce,
            cipher_text: params.cipher_text,
            plain_text: Vec::new(),
        };
        ensure_revealable(&record, ctx.config.account_space)?;

        let allocate = create_account_instruction(
            payer,
            target,
            ctx.config.account_space,
            self.program_id,
            None,
        )?;
        let bump_seed = [bump];
        let seeds: &[&[u8]] = &[record.public_key.as_slice(), bump_seed.as_slice()];
        ctx.invoke_signed(state, accounts.metas(), &allocate, &[seeds])
            .await?;

        let mut account = state
            .load_account(&target)?
            .ok_or(ProgramError::AccountNotFound(target))?;
        store_record(&mut account, &record)?;
        state.store_account(&target, &account)?;

        log::info!(
            "committed {} ciphertext bytes to record {}",
            record.cipher_text.len(),
            target
        );
        ctx.log(format!("commit {}", target));
        Ok(())
    }

    fn reveal_value(
        &self,
        state: &mut dyn StateAccess,
        accounts: InstructionAccounts<'_>,
        params: RevealValueParams,
        ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        check_length("shared_key", &params.shared_key, SHARED_KEY_LENGTH)?;
        let target = accounts.writable(0)?;

        let mut account = state
            .load_account(&target)?
            .ok_or(ProgramError::AccountNotFound(target))?;
        if account.owner != self.program_id {
            return Err(ProgramError::IllegalOwner {
                account: target,
                owner: account.owner,
                expected: self.program_id,
            });
        }
        let mut record = decode_record(&account.data)?;
        if record.is_revealed() {
            return Err(ProgramError::AlreadyRevealed(target));
        }

        let key = SharedKey::from_slice(&params.shared_key)?;
        let plain_text = open_with_shared_key(&key, &record.nonce, &record.cipher_text)
            .map_err(|e| match e {
                CryptoError::Authentication => ProgramError::DecryptionFailed,
                other => ProgramError::Crypto(other),
            })?;

        record.plain_text = plain_text;
        store_record(&mut account, &record)?;
        state.store_account(&target, &account)?;

        log::info!("revealed record {}", target);
        ctx.log(format!("reveal {}", target));
        Ok(())
    }
}

#[async_trait]
impl OnChainProgram for CommitRevealProgram {
    fn id(&self) -> &str {
        "commit_reveal"
    }

    fn program_id(&self) -> Address {
        self.program_id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn process_instruction(
        &self,
        state: &mut dyn StateAccess,
        accounts: &[AccountMeta],
        method: &str,
        params: &[u8],
        ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        match method {
            COMMIT_VALUE => {
                let p: CommitValueParams = codec::from_bytes_canonical(params)
                    .map_err(ProgramError::InvalidInstructionData)?;
                let accounts = InstructionAccounts::new(accounts, 3)?;
                self.commit_value(state, accounts, p, ctx).await
            }
            REVEAL_VALUE => {
                let p: RevealValueParams = codec::from_bytes_canonical(params)
                    .map_err(ProgramError::InvalidInstructionData)?;
                let accounts = InstructionAccounts::new(accounts, 1)?;
                self.reveal_value(state, accounts, p, ctx)
            }
            _ => Err(ProgramError::UnknownMethod(method.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
