// Path: crates/chain/src/local/mod.rs
//! The local chain and its transaction pipeline.

use crate::signing::verify_signatures;
use ae_api::program::{OnChainProgram, ProgramDirectory};
use ae_api::state::{AccountStore, MemoryState, StateAccess, StateChangeSet, StateOverlay};
use ae_api::transaction::context::TxContext;
use ae_services::commit_reveal::CommitRevealProgram;
use ae_services::system::SystemProgram;
use ae_types::app::{AccountInfo, Address, Transaction, TxReceipt};
use ae_types::codec;
use ae_types::config::ChainConfig;
use ae_types::error::{ErrorCode, StateError, TransactionError};
use ae_types::keys::{address_from_account_key, BLOCK_HEIGHT_KEY, PROCESSED_SIGNATURE_PREFIX};
use std::collections::BTreeSet;
use std::sync::Arc;

/// An in-process validator holding all state in memory.
///
/// Transactions execute one at a time. Each one runs inside a `StateOverlay`
/// over the committed state, and every instruction inside a nested overlay, so
/// a failure at any point discards everything the transaction wrote.
pub struct LocalChain {
    config: ChainConfig,
    state: MemoryState,
    programs: ProgramDirectory,
}

impl LocalChain {
    /// Creates a chain with the system program and the commit-reveal program
    /// registered at `config.program_id`.
    pub fn new(config: ChainConfig) -> Self {
        let programs = vec![
            Arc::new(SystemProgram) as Arc<dyn OnChainProgram>,
            Arc::new(CommitRevealProgram::new(config.program_id)),
        ];
        Self::with_programs(config, programs)
    }

    /// Creates a chain hosting exactly `programs`.
    pub fn with_programs(config: ChainConfig, programs: Vec<Arc<dyn OnChainProgram>>) -> Self {
        let programs = ProgramDirectory::new(programs);
        tracing::info!(
            target: "chain",
            event = "genesis",
            programs = programs.programs().count(),
            program_id = %config.program_id,
        );
        Self {
            config,
            state: MemoryState::default(),
            programs,
        }
    }

    /// The chain parameters.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// The registered programs.
    pub fn programs(&self) -> &ProgramDirectory {
        &self.programs
    }

    /// The height of the last committed block.
    pub fn height(&self) -> Result<u64, StateError> {
        read_height(&self.state)
    }

    /// Credits `lamports` to `address`, creating a system wallet if needed.
    pub fn airdrop(&mut self, address: &Address, lamports: u64) -> Result<u64, StateError> {
        let mut account = self
            .state
            .load_account(address)?
            .unwrap_or_else(|| AccountInfo::wallet(0));
        account.lamports = account.lamports.saturating_add(lamports);
        self.state.store_account(address, &account)?;
        tracing::debug!(target: "chain", event = "airdrop", %address, lamports);
        Ok(account.lamports)
    }

    /// Fetches an account.
    pub fn get_account(&self, address: &Address) -> Result<Option<AccountInfo>, StateError> {
        self.state.load_account(address)
    }

    /// The balance of `address`; zero if the account does not exist.
    pub fn get_balance(&self, address: &Address) -> Result<u64, StateError> {
        self.state.lamports(address)
    }

    /// Every committed account owned by `program_id`, in address order.
    pub fn program_accounts(
        &self,
        program_id: &Address,
    ) -> Result<Vec<(Address, AccountInfo)>, StateError> {
        self.state.accounts_owned_by(program_id)
    }

    /// Verifies, executes and commits a transaction.
    ///
    /// On error nothing is written: no fee is charged, no account changes and
    /// the signature is not marked processed, so a corrected resubmission is
    /// possible.
    pub async fn process_transaction(
        &mut self,
        tx: &Transaction,
    ) -> Result<TxReceipt, TransactionError> {
        let (receipt, (inserts, deletes)) = match self.execute(tx, false).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(target: "chain", event = "rejected", code = e.code(), error = %e);
                return Err(e);
            }
        };
        self.state.batch_apply(&inserts, &deletes)?;
        tracing::info!(
            target: "chain",
            event = "commit",
            height = receipt.height,
            signature = %receipt.signature_b58(),
            fee = receipt.fee,
            writes = inserts.len() + deletes.len(),
        );
        Ok(receipt)
    }

    /// Runs a transaction through the full pipeline and discards the result.
    pub async fn simulate_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<TxReceipt, TransactionError> {
        let (receipt, _) = self.execute(tx, true).await?;
        tracing::debug!(target: "chain", event = "simulated", logs = receipt.logs.len());
        Ok(receipt)
    }

    async fn execute(
        &self,
        tx: &Transaction,
        simulation: bool,
    ) -> Result<(TxReceipt, StateChangeSet), TransactionError> {
        let size = tx.encoded_len();
        if size > self.config.max_transaction_size {
            return Err(TransactionError::TooLarge {
                size,
                max: self.config.max_transaction_size,
            });
        }
        if tx.message.instructions.is_empty() {
            return Err(TransactionError::Empty);
        }
        verify_signatures(tx)?;
        let signature = tx.id().ok_or(TransactionError::SignatureMismatch)?;

        let current = self.height()?;
        let recent = tx.message.recent_height;
        if recent > current || current - recent > self.config.max_transaction_age {
            return Err(TransactionError::Expired { recent, current });
        }
        let processed_key = [PROCESSED_SIGNATURE_PREFIX, signature.as_slice()].concat();
        if self.state.get(&processed_key)?.is_some() {
            return Err(TransactionError::AlreadyProcessed);
        }

        let payer = tx.message.payer;
        let fee = self.config.fee_for(tx.signatures.len());
        let mut overlay = StateOverlay::new(&self.state);
        let mut payer_account = overlay.load_account(&payer)?.unwrap_or_default();
        payer_account.lamports = payer_account.lamports.checked_sub(fee).ok_or(
            TransactionError::InsufficientFundsForFee {
                needed: fee,
                available: payer_account.lamports,
            },
        )?;
        overlay.store_account(&payer, &payer_account)?;

        let height = current + 1;
        let signers: BTreeSet<Address> = tx.signatures.iter().map(|s| s.signer).collect();
        let mut logs = Vec::new();

        for (index, ix) in tx.message.instructions.iter().enumerate() {
            let program = self
                .programs
                .get_by_id(&ix.program_id)
                .ok_or(TransactionError::UnknownProgram(ix.program_id))?
                .clone();
            let mut ctx = TxContext::new(
                height,
                payer,
                ix.program_id,
                signers.clone(),
                &self.config,
                &self.programs,
                simulation,
            );
            logs.push(format!("Program {} invoke [1]", ix.program_id));

            let mut scratch = StateOverlay::new(&overlay);
            let result = program
                .process_instruction(&mut scratch, &ix.accounts, &ix.method, &ix.params, &mut ctx)
                .await;
            logs.append(&mut ctx.logs);
            if let Err(source) = result {
                tracing::debug!(target: "chain", event = "instruction_failed", index, program = program.id(), error = %source);
                return Err(TransactionError::InstructionFailed { index, source });
            }

            for key in scratch.written_keys() {
                if let Some(account) = address_from_account_key(key) {
                    let writable = ix
                        .accounts
                        .iter()
                        .any(|m| m.address == account && m.is_writable);
                    if !writable {
                        return Err(TransactionError::ReadonlyAccountModified { index, account });
                    }
                }
            }
            let (inserts, deletes) = scratch.into_ordered_batch();
            overlay.batch_apply(&inserts, &deletes)?;
            logs.push(format!("Program {} success", ix.program_id));
        }

        let height_bytes =
            codec::to_bytes_canonical(&height).map_err(TransactionError::Serialization)?;
        overlay.insert(&processed_key, &height_bytes)?;
        overlay.insert(BLOCK_HEIGHT_KEY, &height_bytes)?;
        for key in self.expired_signatures(height)? {
            overlay.delete(&key)?;
        }

        let receipt = TxReceipt {
            signature,
            height,
            fee,
            logs,
        };
        Ok((receipt, overlay.into_ordered_batch()))
    }
}

impl LocalChain {
    /// Processed-signature keys whose transactions would already fail the
    /// expiry check at `height`. A transaction included at block `h` carries a
    /// `recent_height` of at most `h - 1`.
    fn expired_signatures(&self, height: u64) -> Result<Vec<Vec<u8>>, StateError> {
        let horizon = height.saturating_sub(self.config.max_transaction_age);
        let mut expired = Vec::new();
        for entry in self.state.prefix_scan(PROCESSED_SIGNATURE_PREFIX)? {
            let (key, value) = entry?;
            let included: u64 =
                codec::from_bytes_canonical(&value).map_err(StateError::Decode)?;
            if included <= horizon {
                expired.push(key.to_vec());
            }
        }
        Ok(expired)
    }
}

fn read_height(state: &dyn StateAccess) -> Result<u64, StateError> {
    match state.get(BLOCK_HEIGHT_KEY)? {
        Some(bytes) => codec::from_bytes_canonical(&bytes).map_err(StateError::Decode),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests;
