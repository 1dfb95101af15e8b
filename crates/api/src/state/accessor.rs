// Path: crates/api/src/state/accessor.rs
//! The `StateAccess` trait: the byte-level key-value view programs and the
//! executor work against.

use crate::state::StateScanIter;
use ae_types::error::StateError;

/// Object-safe key-value access. Both the chain's committed store and every
/// `StateOverlay` implement it, so a program cannot tell whether it is writing
/// to committed state or to a transaction's scratch layer.
pub trait StateAccess: Send + Sync {
    /// Reads the value under `key`.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;

    /// Writes every pair in `updates`.
    fn batch_set(&mut self, updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
        updates
            .iter()
            .try_for_each(|(key, value)| self.insert(key, value))
    }

    /// Reads every key in `keys`, preserving order.
    fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
        keys.iter().map(|k| self.get(k)).collect()
    }

    /// Applies deletes and then inserts as one change set. The local chain
    /// commits a transaction through this call.
    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError>;

    /// Iterates over every pair whose key starts with `prefix`, in key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;
}
