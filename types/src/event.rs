//! Audit events emitted by the core engines.
//!
//! Each variant is recorded exactly once per corresponding state mutation.
//! Engines keep their own event log; a failed (rolled-back) operation leaves
//! no events behind.

use crate::{AccountAddress, ChainId, Rate};
use serde::{Deserialize, Serialize};

/// An observable state mutation, for external auditability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// The global rate was lowered by governance.
    RateChanged {
        previous: Rate,
        current: Rate,
        version: u64,
    },
    /// Pending interest was folded into an account's principal.
    InterestMaterialized {
        account: AccountAddress,
        amount: u128,
    },
    /// New units were credited to an account.
    Minted {
        account: AccountAddress,
        amount: u128,
    },
    /// Units were debited from an account.
    Burned {
        account: AccountAddress,
        amount: u128,
    },
    /// A local transfer between two accounts completed.
    TransferCompleted {
        from: AccountAddress,
        to: AccountAddress,
        amount: u128,
    },
    /// Units were burned locally and a cross-ledger message was produced.
    CrossLedgerSent {
        account: AccountAddress,
        amount: u128,
        rate: Rate,
        destination_chain: ChainId,
        nonce: u64,
    },
    /// A cross-ledger message was accepted and minted locally.
    CrossLedgerReceived {
        account: AccountAddress,
        amount: u128,
        rate: Rate,
        origin_chain: ChainId,
        nonce: u64,
    },
}
