//! Metadata storage trait.

use crate::StoreError;

/// Trait for storing small singleton values (total supply, capability
/// registry, governor state) that don't belong in any per-account store.
pub trait MetaStore {
    /// Store a metadata value.
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value.
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}
