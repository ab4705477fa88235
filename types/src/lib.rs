//! Fundamental types for the RBX protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, timestamps, the fixed-point interest rate,
//! ledger instance identifiers, and audit events.

pub mod address;
pub mod chain;
pub mod event;
pub mod rate;
pub mod time;

pub use address::AccountAddress;
pub use chain::ChainId;
pub use event::LedgerEvent;
pub use rate::{Rate, PRECISION};
pub use time::Timestamp;
