//! Fixed-point interest rate.
//!
//! Rates are unsigned fractions scaled by [`PRECISION`] to avoid
//! floating-point errors: a stored value of `PRECISION` means 1.0. A rate is
//! interpreted as linear growth per second, so an account balance grows by
//! `principal * rate * elapsed / PRECISION` over an unreconciled window.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed-point scale factor: 1.0 == 10^18.
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// A per-second linear interest rate, scaled by [`PRECISION`].
///
/// A rate of `5e-8` per second is `Rate::new(50_000_000_000)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(u128);

impl Rate {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The linear growth factor over `elapsed` seconds, scaled by
    /// [`PRECISION`]: `PRECISION + rate * elapsed`.
    ///
    /// Returns `None` on overflow. Zero elapsed time yields exactly
    /// `PRECISION` (a multiplier of 1.0, no growth).
    pub fn checked_growth_factor(&self, elapsed_secs: u64) -> Option<u128> {
        let accrued = self.0.checked_mul(elapsed_secs as u128)?;
        PRECISION.checked_add(accrued)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/1e18 per second", self.0)
    }
}
