// Path: crates/cli/src/testing/assert.rs

use ae_types::app::TxReceipt;
use ae_types::error::{ClientError, ProgramError, TransactionError};
use anyhow::{anyhow, Result};

/// Unwraps the chain's rejection of a transaction that was expected to fail.
pub fn expect_transaction_error(
    result: Result<TxReceipt, ClientError>,
) -> Result<TransactionError> {
    match result {
        Ok(receipt) => Err(anyhow!(
            "transaction {} unexpectedly succeeded",
            receipt.signature_b58()
        )),
        Err(ClientError::SendTransaction(e)) => Ok(e),
        Err(other) => Err(anyhow!("expected a rejected transaction, got: {}", other)),
    }
}

/// Unwraps the program error behind a failed instruction.
pub fn expect_program_error(result: Result<TxReceipt, ClientError>) -> Result<ProgramError> {
    let e = expect_transaction_error(result)?;
    e.program_error()
        .cloned()
        .ok_or_else(|| anyhow!("expected an instruction failure, got: {}", e))
}
