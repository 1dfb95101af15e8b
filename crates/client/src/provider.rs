// Path: crates/client/src/provider.rs
//! A wallet bound to a chain connection.

use crate::rpc::{ChainRpc, LocalRpc};
use crate::wallet::Wallet;
use ae_chain::LocalChain;
use ae_types::app::{Instruction, Message, Transaction, TxReceipt};
use ae_types::config::ChainConfig;
use ae_types::error::ClientError;
use std::sync::Arc;

/// Pairs the fee-paying wallet with the chain it talks to.
#[derive(Clone)]
pub struct Provider {
    wallet: Arc<Wallet>,
    rpc: Arc<dyn ChainRpc>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("wallet", &self.wallet.address())
            .finish_non_exhaustive()
    }
}

impl Provider {
    /// Binds `wallet` to `rpc`.
    pub fn new(wallet: Wallet, rpc: Arc<dyn ChainRpc>) -> Self {
        Self {
            wallet: Arc::new(wallet),
            rpc,
        }
    }

    /// Starts a fresh local chain and funds a new wallet on it with
    /// `config.airdrop_lamports`.
    pub async fn local(config: ChainConfig) -> Result<Self, ClientError> {
        let airdrop = config.airdrop_lamports;
        let rpc = Arc::new(LocalRpc::new(LocalChain::new(config)));
        let wallet = Wallet::generate();
        rpc.request_airdrop(&wallet.address(), airdrop).await?;
        log::info!("funded local wallet {} with {} lamports", wallet.address(), airdrop);
        Ok(Self::new(wallet, rpc))
    }

    /// The fee-paying wallet.
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// The chain connection.
    pub fn rpc(&self) -> &Arc<dyn ChainRpc> {
        &self.rpc
    }

    /// Builds a transaction paid for by the provider wallet against the
    /// latest height.
    pub async fn build_transaction(
        &self,
        instructions: Vec<Instruction>,
        co_signers: &[&Wallet],
    ) -> Result<Transaction, ClientError> {
        let recent_height = self.rpc.latest_height().await?;
        let message = Message::new(self.wallet.address(), recent_height, instructions);
        self.wallet.sign(message, co_signers)
    }

    /// Builds, signs and sends a transaction.
    pub async fn send(
        &self,
        instructions: Vec<Instruction>,
        co_signers: &[&Wallet],
    ) -> Result<TxReceipt, ClientError> {
        let tx = self.build_transaction(instructions, co_signers).await?;
        let receipt = self.rpc.send_transaction(&tx).await?;
        log::debug!("transaction {} committed at height {}", receipt.signature_b58(), receipt.height);
        Ok(receipt)
    }
}
