// Path: crates/api/src/program/mod.rs
//! Traits for programs hosted by the chain.

use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use ae_types::app::{AccountMeta, Address};
use ae_types::error::ProgramError;
use async_trait::async_trait;
use std::any::Any;

mod accounts;
mod directory;

pub use accounts::InstructionAccounts;
pub use directory::ProgramDirectory;

/// The base trait for any program the chain can execute.
///
/// A program is stateless: everything it persists lives in the accounts it is
/// handed. The executor wraps each instruction in its own state overlay, so a
/// program returning `Err` leaves no trace in state.
#[async_trait]
pub trait OnChainProgram: Any + Send + Sync {
    /// A unique, static, lowercase identifier used in logs.
    fn id(&self) -> &str;

    /// The address instructions target to reach this program.
    fn program_id(&self) -> Address;

    /// Provides access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Executes one instruction.
    ///
    /// `method` is the versioned method name (e.g. `commit_value@v1`) and
    /// `params` its SCALE-encoded parameters.
    ///
    /// # Default Implementation
    /// Returns `UnknownMethod`. Programs override this to expose methods.
    async fn process_instruction(
        &self,
        state: &mut dyn StateAccess,
        accounts: &[AccountMeta],
        method: &str,
        params: &[u8],
        ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        let _ = (state, accounts, params, ctx);
        Err(ProgramError::UnknownMethod(format!(
            "{} does not implement '{}'",
            self.id(),
            method
        )))
    }
}
