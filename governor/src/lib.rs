//! Rate governance for the RBX protocol.
//!
//! The global interest rate is a single versioned configuration value with
//! one mutation entry point. It can only ever go down: every account's
//! locked rate is therefore an upper bound on what later depositors receive,
//! which is the protocol's first-mover incentive.

pub mod error;
pub mod governor;

pub use error::GovernorError;
pub use governor::{RateChange, RateGovernor};
