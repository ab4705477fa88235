//! The cross-ledger transfer gateway.
//!
//! Two gateway instances, one per ledger, coordinate only through
//! [`CrossLedgerMessage`] payloads carried by an external transport. The
//! outbound side burns locally before any message exists (lock-or-burn); the
//! inbound side validates origin and mints with the sender's locked rate
//! (release-or-mint). Retry, deduplication, and delivery timing are the
//! transport's problem, never this crate's.

pub mod codec;
pub mod error;
pub mod gateway;
pub mod message;

pub use error::GatewayError;
pub use gateway::TransferGateway;
pub use message::{CrossLedgerMessage, WIRE_VERSION};
