//! Nullable store — thread-safe in-memory storage for testing.

use rbx_store::{AccountStore, MetaStore, StoreError};
use rbx_types::AccountAddress;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory account + meta store for testing.
pub struct NullStore {
    accounts: Mutex<HashMap<String, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for NullStore {
    fn get_account(&self, address: &AccountAddress) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .get(address.as_str())
            .cloned())
    }

    fn put_account(&self, address: &AccountAddress, state: &[u8]) -> Result<(), StoreError> {
        self.accounts
            .lock()
            .unwrap()
            .insert(address.to_string(), state.to_vec());
        Ok(())
    }

    fn delete_account(&self, address: &AccountAddress) -> Result<(), StoreError> {
        self.accounts.lock().unwrap().remove(address.as_str());
        Ok(())
    }

    fn iter_accounts(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (AccountAddress::new(k.clone()), v.clone()))
            .collect())
    }
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }
}
