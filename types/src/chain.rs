//! Ledger instance identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one ledger instance in a cross-ledger pairing.
///
/// The two paired ledgers carry distinct `ChainId`s; every
/// `CrossLedgerMessage` names both its origin and destination so a gateway
/// can reject traffic that was not addressed to its own ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(u64);

impl ChainId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain-{}", self.0)
    }
}
