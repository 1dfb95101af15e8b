// Path: crates/cli/src/testing/chain.rs

use ae_chain::LocalChain;
use ae_client::{ChainRpc, LocalRpc, ProgramClient, Provider, Wallet};
use ae_types::app::{Address, Transaction, TxReceipt};
use ae_types::config::ChainConfig;
use ae_types::error::ClientError;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A local chain with a funded wallet and a commit-reveal client bound to it.
pub struct TestChain {
    rpc: LocalRpc,
    client: ProgramClient,
    config: ChainConfig,
}

impl TestChain {
    /// Starts a chain with the default configuration.
    pub async fn new() -> Result<Self> {
        Self::with_config(ChainConfig::default()).await
    }

    /// Starts a chain with `config` and funds a payer with `config.airdrop_lamports`.
    pub async fn with_config(config: ChainConfig) -> Result<Self> {
        let rpc = LocalRpc::new(LocalChain::new(config.clone()));
        let wallet = Wallet::generate();
        rpc.request_airdrop(&wallet.address(), config.airdrop_lamports)
            .await?;
        let provider = Provider::new(wallet, Arc::new(rpc.clone()));
        let client = ProgramClient::new(provider, config.program_id);
        Ok(Self {
            rpc,
            client,
            config,
        })
    }

    /// The commit-reveal client paying with the default wallet.
    pub fn client(&self) -> &ProgramClient {
        &self.client
    }

    /// The default fee payer.
    pub fn payer(&self) -> &Wallet {
        self.client.provider().wallet()
    }

    /// The chain configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Direct access to the chain, for assertions that bypass the client.
    pub fn chain(&self) -> Arc<Mutex<LocalChain>> {
        self.rpc.chain()
    }

    /// A second client on the same chain, paying with a freshly funded wallet.
    pub async fn new_client(&self, lamports: u64) -> Result<ProgramClient> {
        let wallet = Wallet::generate();
        self.rpc.request_airdrop(&wallet.address(), lamports).await?;
        let provider = Provider::new(wallet, Arc::new(self.rpc.clone()));
        Ok(ProgramClient::new(provider, self.config.program_id))
    }

    /// The balance of `address`.
    pub async fn balance(&self, address: &Address) -> Result<u64> {
        Ok(self.rpc.get_balance(address).await?)
    }

    /// The current chain height.
    pub async fn height(&self) -> Result<u64> {
        Ok(self.rpc.latest_height().await?)
    }

    /// Submits an already signed transaction as-is.
    pub async fn send_raw(&self, tx: &Transaction) -> Result<TxReceipt, ClientError> {
        self.rpc.send_transaction(tx).await
    }
}
