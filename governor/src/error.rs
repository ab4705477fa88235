//! Governance-specific errors.

use rbx_types::Rate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernorError {
    #[error("rate increase rejected: requested {requested}, current {current}")]
    RateIncreaseRejected { requested: Rate, current: Rate },

    #[error("caller {0} is not the governance authority")]
    Unauthorized(String),
}
