// Path: crates/api/src/transaction/context.rs
//! Defines the context handed to programs during execution.

use crate::program::ProgramDirectory;
use crate::state::StateAccess;
use ae_crypto::address::create_program_address;
use ae_types::app::{AccountMeta, Address, Instruction};
use ae_types::config::ChainConfig;
use ae_types::error::ProgramError;
use std::collections::BTreeSet;

/// Maximum nesting of cross-program invocations below the top-level instruction.
pub const MAX_INVOKE_DEPTH: usize = 4;

/// Provides context to programs during execution, and the means to invoke
/// other programs.
pub struct TxContext<'a> {
    /// The height of the block the transaction will be committed in.
    pub block_height: u64,
    /// The account paying the transaction fee.
    pub fee_payer: Address,
    /// The program currently executing.
    pub program_id: Address,
    /// The chain parameters (rent, sizes).
    pub config: &'a ChainConfig,
    /// All registered programs, for cross-program invocation.
    pub programs: &'a ProgramDirectory,
    /// If true, the transaction is being simulated and will be discarded.
    pub simulation: bool,
    /// Log lines emitted by programs, in order.
    pub logs: Vec<String>,
    signers: BTreeSet<Address>,
    depth: usize,
}

impl<'a> TxContext<'a> {
    /// Creates the context for a top-level instruction.
    pub fn new(
        block_height: u64,
        fee_payer: Address,
        program_id: Address,
        signers: BTreeSet<Address>,
        config: &'a ChainConfig,
        programs: &'a ProgramDirectory,
        simulation: bool,
    ) -> Self {
        Self {
            block_height,
            fee_payer,
            program_id,
            config,
            programs,
            simulation,
            logs: Vec::new(),
            signers,
            depth: 0,
        }
    }

    /// True if `address` signed the transaction (or was signed for by a calling program).
    pub fn is_signer(&self, address: &Address) -> bool {
        self.signers.contains(address)
    }

    /// Appends a program log line.
    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!("[{}] {}", self.program_id, line);
        self.logs.push(format!("Program {} log: {}", self.program_id, line));
    }

    /// Invokes another program.
    ///
    /// `caller_accounts` are the accounts the current instruction received. The
    /// callee may only see accounts from that list, with at most the same
    /// privileges, except that addresses derived from `signer_seeds` under the
    /// current program's id are additionally treated as signers.
    pub async fn invoke_signed(
        &mut self,
        state: &mut dyn StateAccess,
        caller_accounts: &[AccountMeta],
        instruction: &Instruction,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<(), ProgramError> {
        if self.depth >= MAX_INVOKE_DEPTH {
            return Err(ProgramError::CallDepthExceeded(self.depth + 1));
        }

        let mut pda_signers = BTreeSet::new();
        for seeds in signer_seeds {
            pda_signers.insert(create_program_address(seeds, &self.program_id)?);
        }

        let mut child_signers = BTreeSet::new();
        for meta in &instruction.accounts {
            let caller = caller_accounts
                .iter()
                .find(|c| c.address == meta.address)
                .ok_or(ProgramError::PrivilegeEscalation(meta.address))?;
            if meta.is_writable && !caller.is_writable {
                return Err(ProgramError::PrivilegeEscalation(meta.address));
            }
            if meta.is_signer {
                let signed = (caller.is_signer && self.is_signer(&meta.address))
                    || pda_signers.contains(&meta.address);
                if !signed {
                    return Err(ProgramError::PrivilegeEscalation(meta.address));
                }
                child_signers.insert(meta.address);
            }
        }

        let program = self
            .programs
            .get_by_id(&instruction.program_id)
            .ok_or(ProgramError::UnknownProgram(instruction.program_id))?
            .clone();

        let mut child = TxContext {
            block_height: self.block_height,
            fee_payer: self.fee_payer,
            program_id: instruction.program_id,
            config: self.config,
            programs: self.programs,
            simulation: self.simulation,
            logs: Vec::new(),
            signers: child_signers,
            depth: self.depth + 1,
        };
        self.logs.push(format!(
            "Program {} invoke [{}]",
            instruction.program_id,
            child.depth + 1
        ));
        let result = program
            .process_instruction(
                state,
                &instruction.accounts,
                &instruction.method,
                &instruction.params,
                &mut child,
            )
            .await;
        self.logs.append(&mut child.logs);
        result
    }
}
