//! Gateway-specific errors.

use rbx_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The delivered message failed authenticity or origin validation; the
    /// inbound mint was not performed.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("no remote gateway registered")]
    RemoteNotRegistered,

    #[error("remote gateway already registered")]
    RemoteAlreadyRegistered,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
