// Path: crates/chain/src/signing.rs
//! Signing and verifying transactions with ed25519 wallet keys.

use ae_crypto::sign::eddsa::{verify, WalletKeyPair};
use ae_types::app::{Message, Transaction, TxSignature};
use ae_types::error::TransactionError;

/// Signs `message` with every required signer, in `required_signers` order.
///
/// `signers` may be given in any order and may include extra keys; a missing
/// required signer is an error.
pub fn sign_transaction(
    message: Message,
    signers: &[&WalletKeyPair],
) -> Result<Transaction, TransactionError> {
    let bytes = message
        .to_sign_bytes()
        .map_err(TransactionError::Serialization)?;
    let signatures = message
        .required_signers()
        .into_iter()
        .map(|address| {
            signers
                .iter()
                .find(|kp| kp.address() == address)
                .map(|kp| TxSignature {
                    signer: address,
                    signature: kp.sign(&bytes),
                })
                .ok_or(TransactionError::SignatureMismatch)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Transaction {
        message,
        signatures,
    })
}

/// Checks that `tx` carries exactly one valid signature per required signer,
/// in order.
pub fn verify_signatures(tx: &Transaction) -> Result<(), TransactionError> {
    let required = tx.message.required_signers();
    if required.len() != tx.signatures.len()
        || required
            .iter()
            .zip(&tx.signatures)
            .any(|(addr, sig)| *addr != sig.signer)
    {
        return Err(TransactionError::SignatureMismatch);
    }
    let bytes = tx
        .message
        .to_sign_bytes()
        .map_err(TransactionError::Serialization)?;
    for sig in &tx.signatures {
        verify(&sig.signer, &bytes, &sig.signature)
            .map_err(|_| TransactionError::InvalidSignature(sig.signer))?;
    }
    Ok(())
}
