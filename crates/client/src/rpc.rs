// Path: crates/client/src/rpc.rs
//! The transport between a client and a chain.

use ae_chain::LocalChain;
use ae_types::app::{AccountInfo, Address, Transaction, TxReceipt};
use ae_types::error::{ClientError, StateError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The operations a client needs from a chain.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Submits a signed transaction and waits for it to commit.
    async fn send_transaction(&self, tx: &Transaction) -> Result<TxReceipt, ClientError>;

    /// Executes a signed transaction without committing it.
    async fn simulate_transaction(&self, tx: &Transaction) -> Result<TxReceipt, ClientError>;

    /// Fetches an account, or `None` if it does not exist.
    async fn get_account(&self, address: &Address) -> Result<Option<AccountInfo>, ClientError>;

    /// The lamport balance of `address`.
    async fn get_balance(&self, address: &Address) -> Result<u64, ClientError>;

    /// Every account owned by `program_id`, in address order.
    async fn get_program_accounts(
        &self,
        program_id: &Address,
    ) -> Result<Vec<(Address, AccountInfo)>, ClientError>;

    /// Credits `lamports` to `address` and returns the new balance.
    async fn request_airdrop(&self, address: &Address, lamports: u64) -> Result<u64, ClientError>;

    /// The height of the last committed block.
    async fn latest_height(&self) -> Result<u64, ClientError>;
}

fn rpc_error(e: StateError) -> ClientError {
    ClientError::Rpc(e.to_string())
}

/// Talks to an in-process [`LocalChain`].
#[derive(Clone)]
pub struct LocalRpc {
    chain: Arc<Mutex<LocalChain>>,
}

impl std::fmt::Debug for LocalRpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalRpc").finish_non_exhaustive()
    }
}

impl LocalRpc {
    /// Takes ownership of a chain.
    pub fn new(chain: LocalChain) -> Self {
        Self::shared(Arc::new(Mutex::new(chain)))
    }

    /// Wraps a chain that other handles may also hold.
    pub fn shared(chain: Arc<Mutex<LocalChain>>) -> Self {
        Self { chain }
    }

    /// A handle to the underlying chain.
    pub fn chain(&self) -> Arc<Mutex<LocalChain>> {
        self.chain.clone()
    }
}

#[async_trait]
impl ChainRpc for LocalRpc {
    async fn send_transaction(&self, tx: &Transaction) -> Result<TxReceipt, ClientError> {
        let mut chain = self.chain.lock().await;
        Ok(chain.process_transaction(tx).await?)
    }

    async fn simulate_transaction(&self, tx: &Transaction) -> Result<TxReceipt, ClientError> {
        let chain = self.chain.lock().await;
        Ok(chain.simulate_transaction(tx).await?)
    }

    async fn get_account(&self, address: &Address) -> Result<Option<AccountInfo>, ClientError> {
        self.chain.lock().await.get_account(address).map_err(rpc_error)
    }

    async fn get_balance(&self, address: &Address) -> Result<u64, ClientError> {
        self.chain.lock().await.get_balance(address).map_err(rpc_error)
    }

    async fn get_program_accounts(
        &self,
        program_id: &Address,
    ) -> Result<Vec<(Address, AccountInfo)>, ClientError> {
        self.chain
            .lock()
            .await
            .program_accounts(program_id)
            .map_err(rpc_error)
    }

    async fn request_airdrop(&self, address: &Address, lamports: u64) -> Result<u64, ClientError> {
        self.chain
            .lock()
            .await
            .airdrop(address, lamports)
            .map_err(rpc_error)
    }

    async fn latest_height(&self) -> Result<u64, ClientError> {
        self.chain.lock().await.height().map_err(rpc_error)
    }
}
