//! Account state storage trait.

use crate::StoreError;
use rbx_types::AccountAddress;

/// Store trait for persisting ledger account state to durable storage.
///
/// Uses opaque `Vec<u8>` so the store doesn't depend on the `rbx-ledger`
/// crate (which would create a circular dependency). The ledger engine
/// serializes/deserializes its own account type.
pub trait AccountStore {
    fn get_account(&self, address: &AccountAddress) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_account(&self, address: &AccountAddress, state: &[u8]) -> Result<(), StoreError>;
    fn delete_account(&self, address: &AccountAddress) -> Result<(), StoreError>;
    fn iter_accounts(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError>;
}
