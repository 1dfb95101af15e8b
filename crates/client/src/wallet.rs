// Path: crates/client/src/wallet.rs
//! A fee-paying, transaction-signing identity.

use ae_chain::sign_transaction;
use ae_crypto::sign::eddsa::WalletKeyPair;
use ae_types::app::{Address, Message, Transaction};
use ae_types::error::ClientError;

/// An ed25519 key pair that pays for and signs transactions.
#[derive(Clone, Debug)]
pub struct Wallet {
    keypair: WalletKeyPair,
}

impl Wallet {
    /// Generates a fresh wallet.
    pub fn generate() -> Self {
        Self {
            keypair: WalletKeyPair::generate(),
        }
    }

    /// Rebuilds a wallet from its 32-byte seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, ClientError> {
        Ok(Self {
            keypair: WalletKeyPair::from_seed(seed)?,
        })
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// The underlying key pair.
    pub fn keypair(&self) -> &WalletKeyPair {
        &self.keypair
    }

    /// Signs `message` as payer, together with any `co_signers`.
    pub fn sign(&self, message: Message, co_signers: &[&Wallet]) -> Result<Transaction, ClientError> {
        let mut keys = vec![&self.keypair];
        keys.extend(co_signers.iter().map(|w| &w.keypair));
        sign_transaction(message, &keys).map_err(|e| ClientError::BuildTransaction(e.to_string()))
    }
}
