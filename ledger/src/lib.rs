//! The accrual ledger — the value-bearing account engine of the RBX protocol.
//!
//! Balances grow implicitly over time at each account's locked rate. Nothing
//! is eagerly updated: `balance_of` is a pure projection, and pending
//! interest is folded into principal (`materialize`) only when an operation
//! mutates the account. Each window of growth is linear, but because every
//! mutation re-anchors the window, repeated actions compound the effective
//! growth — that supra-linear aggregate trajectory is load-bearing protocol
//! behavior, not an accident to be corrected.
//!
//! This crate handles:
//! - Lazy balance projection and interest materialization
//! - Mint/burn/transfer with locked-rate assignment and inheritance
//! - Capability-gated privileged operations (mint-and-burn, delegates)
//! - Custody redeem with atomic rollback on asset-release failure
//! - Persistence over the `rbx-store` traits

pub mod access;
pub mod account;
pub mod custody;
pub mod engine;
pub mod error;

pub use access::CapabilityRegistry;
pub use account::Account;
pub use custody::{AssetCustody, CustodyError};
pub use engine::{AccrualLedger, AMOUNT_MAX};
pub use error::LedgerError;
