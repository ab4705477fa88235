//! Abstract storage traits for the RBX protocol.
//!
//! Every storage backend (in-memory for testing, an embedded database in a
//! deployment) implements these traits. The rest of the workspace depends
//! only on the traits.

pub mod account;
pub mod error;
pub mod meta;

pub use account::AccountStore;
pub use error::StoreError;
pub use meta::MetaStore;
