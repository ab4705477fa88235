//! Ledger-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("caller {caller} is not authorized for {operation}")]
    Unauthorized {
        caller: String,
        operation: &'static str,
    },

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("arithmetic overflow in accrual computation")]
    Overflow,

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("asset release failed, burn rolled back: {reason}")]
    AssetReleaseFailed { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] rbx_store::StoreError),
}
