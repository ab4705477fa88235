//! The versioned cross-ledger message type.

use rbx_types::{AccountAddress, ChainId, Rate};
use serde::{Deserialize, Serialize};

/// Current wire version. Bumped on any incompatible message change.
pub const WIRE_VERSION: u16 = 1;

/// The only coordination between two paired ledgers.
///
/// Produced by the origin gateway's outbound step, consumed exactly once by
/// the paired gateway to perform the inbound mint. The `amount` burned on
/// origin equals the `amount` carried here, and `origin_rate` is the
/// sender's locked rate read before the burn mutated anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossLedgerMessage {
    pub version: u16,
    pub origin_chain: ChainId,
    pub destination_chain: ChainId,
    /// Per-origin-gateway sequence number, for transport deduplication.
    pub nonce: u64,
    pub amount: u128,
    pub origin_rate: Rate,
    pub destination_account: AccountAddress,
}
