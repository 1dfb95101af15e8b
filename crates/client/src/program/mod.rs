// Path: crates/client/src/program/mod.rs
//! Typed access to the commit-reveal program.

use crate::provider::Provider;
use ae_services::commit_reveal::{
    commit_value_instruction, decode_record, record_address, record_discriminator,
    reveal_value_instruction, CommitValueParams,
};
use ae_types::app::{Address, EncryptedAccount, TxReceipt};
use ae_types::error::ClientError;

/// Calls the commit-reveal program through a [`Provider`].
#[derive(Clone, Debug)]
pub struct ProgramClient {
    provider: Provider,
    program_id: Address,
}

impl ProgramClient {
    /// A client for the program deployed at `program_id`.
    pub fn new(provider: Provider, program_id: Address) -> Self {
        Self {
            provider,
            program_id,
        }
    }

    /// The program address.
    pub fn program_id(&self) -> Address {
        self.program_id
    }

    /// The provider used to pay for and send transactions.
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// The address of the record committed under `public_key`.
    pub fn record_address(&self, public_key: &[u8]) -> Result<Address, ClientError> {
        Ok(record_address(public_key, &self.program_id)?.0)
    }

    /// Publishes a sealed value in the record derived from `public_key`.
    pub async fn commit_value(
        &self,
        public_key: &[u8],
        nonce: &[u8],
        cipher_text: &[u8],
    ) -> Result<TxReceipt, ClientError> {
        let ix = commit_value_instruction(
            self.program_id,
            self.provider.wallet().address(),
            CommitValueParams {
                public_key: public_key.to_vec(),
                nonce: nonce.to_vec(),
                cipher_text: cipher_text.to_vec(),
            },
        )
        .map_err(|e| ClientError::BuildTransaction(e.to_string()))?;
        self.provider.send(vec![ix], &[]).await
    }

    /// Opens the record committed under `committer_public_key` with `shared_key`.
    pub async fn reveal_value(
        &self,
        committer_public_key: &[u8],
        shared_key: &[u8],
    ) -> Result<TxReceipt, ClientError> {
        let record = self.record_address(committer_public_key)?;
        let ix = reveal_value_instruction(self.program_id, record, shared_key)
            .map_err(|e| ClientError::BuildTransaction(e.to_string()))?;
        self.provider.send(vec![ix], &[]).await
    }

    /// Reads and decodes the record at `address`.
    pub async fn fetch_encrypted_account(
        &self,
        address: &Address,
    ) -> Result<EncryptedAccount, ClientError> {
        let account = self
            .provider
            .rpc()
            .get_account(address)
            .await?
            .ok_or(ClientError::AccountNotFound(*address))?;
        if account.owner != self.program_id {
            return Err(ClientError::AccountDecode {
                address: *address,
                reason: format!("owned by {}, not {}", account.owner, self.program_id),
            });
        }
        decode_record(&account.data).map_err(|e| ClientError::AccountDecode {
            address: *address,
            reason: e.to_string(),
        })
    }

    /// Every record the program holds, committed or revealed. Program-owned
    /// accounts without the record discriminator are skipped.
    pub async fn all_encrypted_accounts(
        &self,
    ) -> Result<Vec<(Address, EncryptedAccount)>, ClientError> {
        let discriminator = record_discriminator();
        let accounts = self
            .provider
            .rpc()
            .get_program_accounts(&self.program_id)
            .await?;
        accounts
            .into_iter()
            .filter(|(_, account)| account.data.starts_with(&discriminator))
            .map(|(address, account)| {
                decode_record(&account.data)
                    .map(|record| (address, record))
                    .map_err(|e| ClientError::AccountDecode {
                        address,
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}
