// Path: crates/api/src/program/accounts.rs
//! Positional access to an instruction's account list.

use crate::transaction::context::TxContext;
use ae_types::app::{AccountMeta, Address};
use ae_types::error::ProgramError;

/// Wraps an instruction's accounts and checks their flags on access.
#[derive(Debug, Clone, Copy)]
pub struct InstructionAccounts<'a> {
    metas: &'a [AccountMeta],
}

impl<'a> InstructionAccounts<'a> {
    /// Wraps `metas`, failing unless at least `expected` accounts are present.
    pub fn new(metas: &'a [AccountMeta], expected: usize) -> Result<Self, ProgramError> {
        if metas.len() < expected {
            return Err(ProgramError::NotEnoughAccountKeys {
                expected,
                got: metas.len(),
            });
        }
        Ok(Self { metas })
    }

    /// The account at `index`.
    pub fn get(&self, index: usize) -> Result<&'a AccountMeta, ProgramError> {
        self.metas
            .get(index)
            .ok_or(ProgramError::NotEnoughAccountKeys {
                expected: index + 1,
                got: self.metas.len(),
            })
    }

    /// The address at `index`, which must be marked writable.
    pub fn writable(&self, index: usize) -> Result<Address, ProgramError> {
        let meta = self.get(index)?;
        if !meta.is_writable {
            return Err(ProgramError::AccountNotWritable(meta.address));
        }
        Ok(meta.address)
    }

    /// The address at `index`, which must have signed the transaction.
    pub fn signer(&self, index: usize, ctx: &TxContext<'_>) -> Result<Address, ProgramError> {
        let meta = self.get(index)?;
        if !meta.is_signer || !ctx.is_signer(&meta.address) {
            return Err(ProgramError::MissingRequiredSignature(meta.address));
        }
        Ok(meta.address)
    }

    /// The address at `index`, which must equal `expected` (a program id).
    pub fn program(&self, index: usize, expected: &Address) -> Result<Address, ProgramError> {
        let meta = self.get(index)?;
        if meta.address != *expected {
            return Err(ProgramError::IncorrectProgramId {
                expected: *expected,
                got: meta.address,
            });
        }
        Ok(meta.address)
    }

    /// The underlying metas.
    pub fn metas(&self) -> &'a [AccountMeta] {
        self.metas
    }
}
