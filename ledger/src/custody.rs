//! Interface contract for the external custody component.
//!
//! Custody holds the underlying asset; the ledger only sees its release
//! step. A redeem burns ledger units first, then asks custody to release the
//! asset — if the release fails, the ledger rolls the burn back so the whole
//! redeem is one atomic unit from the caller's perspective.

use rbx_types::AccountAddress;
use thiserror::Error;

/// Failure reported by the custody component's asset release.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CustodyError(pub String);

/// The one operation the core requires of the custody component.
pub trait AssetCustody {
    /// Release `amount` of the underlying asset to `to`.
    fn release(&mut self, to: &AccountAddress, amount: u128) -> Result<(), CustodyError>;
}
