// Path: crates/api/src/state/accounts.rs
//! Typed access to `AccountInfo` records.

use crate::state::StateAccess;
use ae_types::app::{AccountInfo, Address};
use ae_types::codec;
use ae_types::error::StateError;
use ae_types::keys::{account_info_key, address_from_account_key, ACCOUNT_INFO_PREFIX};

/// Load and store `AccountInfo` by address on any `StateAccess`.
pub trait AccountStore {
    /// Loads an account, or `None` if it does not exist.
    fn load_account(&self, address: &Address) -> Result<Option<AccountInfo>, StateError>;

    /// Writes an account.
    fn store_account(&mut self, address: &Address, account: &AccountInfo)
        -> Result<(), StateError>;

    /// Lamport balance of an account; zero if it does not exist.
    fn lamports(&self, address: &Address) -> Result<u64, StateError> {
        Ok(self
            .load_account(address)?
            .map(|a| a.lamports)
            .unwrap_or(0))
    }

    /// True if the account exists.
    fn account_exists(&self, address: &Address) -> Result<bool, StateError> {
        Ok(self.load_account(address)?.is_some())
    }

    /// Every account owned by `owner`, in address order.
    fn accounts_owned_by(&self, owner: &Address)
        -> Result<Vec<(Address, AccountInfo)>, StateError>;
}

impl<S: StateAccess + ?Sized> AccountStore for S {
    fn load_account(&self, address: &Address) -> Result<Option<AccountInfo>, StateError> {
        self.get(&account_info_key(address))?
            .map(|bytes| codec::from_bytes_canonical(&bytes).map_err(StateError::Decode))
            .transpose()
    }

    fn store_account(
        &mut self,
        address: &Address,
        account: &AccountInfo,
    ) -> Result<(), StateError> {
        let bytes = codec::to_bytes_canonical(account).map_err(StateError::Encode)?;
        self.insert(&account_info_key(address), &bytes)
    }

    fn accounts_owned_by(
        &self,
        owner: &Address,
    ) -> Result<Vec<(Address, AccountInfo)>, StateError> {
        let mut owned = Vec::new();
        for entry in self.prefix_scan(ACCOUNT_INFO_PREFIX)? {
            let (key, value) = entry?;
            let Some(address) = address_from_account_key(&key) else {
                continue;
            };
            let account: AccountInfo =
                codec::from_bytes_canonical(&value).map_err(StateError::Decode)?;
            if account.owner == *owner {
                owned.push((address, account));
            }
        }
        Ok(owned)
    }
}
