// Path: crates/services/src/system/mod.rs
//! The system program: allocates accounts and moves lamports.
//!
//! Every account starts life here. `create_account` funds a new address with
//! its rent-exempt minimum, reserves `space` bytes and hands ownership to
//! another program. Only the owner may write the account's data afterwards.

use ae_api::prelude::*;
use ae_types::app::{AccountInfo, AccountMeta, Address, Instruction, SYSTEM_PROGRAM_ID};
use ae_types::codec;
use async_trait::async_trait;
use parity_scale_codec::{Decode, Encode};
use std::any::Any;

/// Method name for [`CreateAccountParams`].
pub const CREATE_ACCOUNT: &str = "create_account@v1";
/// Method name for [`TransferParams`].
pub const TRANSFER: &str = "transfer@v1";

/// Parameters for `create_account@v1`.
///
/// Accounts: `[funder (signer, writable), new_account (signer, writable)]`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountParams {
    /// Bytes to reserve for the account's data.
    pub space: u32,
    /// The program that will own the account.
    pub owner: Address,
    /// Lamports to deposit. `None` deposits exactly the rent-exempt minimum;
    /// smaller amounts are raised to it.
    pub lamports: Option<u64>,
}

/// Parameters for `transfer@v1`.
///
/// Accounts: `[from (signer, writable), to (writable)]`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    /// Amount to move.
    pub lamports: u64,
}

/// Builds a `create_account@v1` instruction.
pub fn create_account_instruction(
    funder: Address,
    new_account: Address,
    space: u32,
    owner: Address,
    lamports: Option<u64>,
) -> Result<Instruction, ProgramError> {
    Instruction::new(
        SYSTEM_PROGRAM_ID,
        CREATE_ACCOUNT,
        &CreateAccountParams {
            space,
            owner,
            lamports,
        },
        vec![
            AccountMeta::writable(funder, true),
            AccountMeta::writable(new_account, true),
        ],
    )
    .map_err(ProgramError::InvalidInstructionData)
}

/// Builds a `transfer@v1` instruction.
pub fn transfer_instruction(
    from: Address,
    to: Address,
    lamports: u64,
) -> Result<Instruction, ProgramError> {
    Instruction::new(
        SYSTEM_PROGRAM_ID,
        TRANSFER,
        &TransferParams { lamports },
        vec![AccountMeta::writable(from, true), AccountMeta::writable(to, false)],
    )
    .map_err(ProgramError::InvalidInstructionData)
}

/// The built-in program living at [`SYSTEM_PROGRAM_ID`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProgram;

impl SystemProgram {
    fn create_account(
        &self,
        state: &mut dyn StateAccess,
        accounts: &InstructionAccounts<'_>,
        params: CreateAccountParams,
        ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        let funder = accounts.signer(0, ctx)?;
        accounts.writable(0)?;
        let new_account = accounts.signer(1, ctx)?;
        accounts.writable(1)?;

        if state.account_exists(&new_account)? {
            return Err(ProgramError::AccountAlreadyInUse(new_account));
        }

        let minimum = ctx.config.rent_exempt_minimum(params.space);
        let deposit = params.lamports.map_or(minimum, |l| l.max(minimum));
        let mut funder_info = state
            .load_account(&funder)?
            .ok_or(ProgramError::AccountNotFound(funder))?;
        funder_info.lamports = funder_info.lamports.checked_sub(deposit).ok_or(
            ProgramError::InsufficientFunds {
                needed: deposit,
                available: funder_info.lamports,
            },
        )?;

        state.store_account(&funder, &funder_info)?;
        state.store_account(
            &new_account,
            &AccountInfo {
                owner: params.owner,
                lamports: deposit,
                space: params.space,
                data: Vec::new(),
            },
        )?;
        ctx.log(format!(
            "created {} ({} bytes, {} lamports) owned by {}",
            new_account, params.space, deposit, params.owner
        ));
        Ok(())
    }

    fn transfer(
        &self,
        state: &mut dyn StateAccess,
        accounts: &InstructionAccounts<'_>,
        params: TransferParams,
        ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        let from = accounts.signer(0, ctx)?;
        accounts.writable(0)?;
        let to = accounts.writable(1)?;

        let mut from_info = state
            .load_account(&from)?
            .ok_or(ProgramError::AccountNotFound(from))?;
        if from_info.owner != SYSTEM_PROGRAM_ID {
            return Err(ProgramError::IllegalOwner {
                account: from,
                owner: from_info.owner,
                expected: SYSTEM_PROGRAM_ID,
            });
        }
        from_info.lamports = from_info.lamports.checked_sub(params.lamports).ok_or(
            ProgramError::InsufficientFunds {
                needed: params.lamports,
                available: from_info.lamports,
            },
        )?;
        state.store_account(&from, &from_info)?;

        // Load `to` after writing `from` so a self-transfer nets to zero.
        let mut to_info = state
            .load_account(&to)?
            .unwrap_or_else(|| AccountInfo::wallet(0));
        to_info.lamports = to_info
            .lamports
            .checked_add(params.lamports)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        state.store_account(&to, &to_info)?;
        Ok(())
    }
}

#[async_trait]
impl OnChainProgram for SystemProgram {
    fn id(&self) -> &str {
        "system"
    }

    fn program_id(&self) -> Address {
        SYSTEM_PROGRAM_ID
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
        let accounts = InstructionAccounts::new(accounts, 2)?;
        match method {
            CREATE_ACCOUNT => {
                let p: CreateAccountParams = codec::from_bytes_canonical(params)
                    .map_err(ProgramError::InvalidInstructionData)?;
                self.create_account(state, &accounts, p, ctx)
            }
            TRANSFER => {
                let p: TransferParams = codec::from_bytes_canonical(params)
                    .map_err(ProgramError::InvalidInstructionData)?;
                self.transfer(state, &accounts, p, ctx)
            }
            _ => Err(ProgramError::UnknownMethod(method.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
