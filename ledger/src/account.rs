//! Per-account state: principal, locked rate, last reconciliation time.

use rbx_types::{Rate, Timestamp, PRECISION};
use serde::{Deserialize, Serialize};

/// State for a single ledger account.
///
/// Created lazily on the first credit and never destroyed — a fully drained
/// account persists with `principal = 0`, which is exactly the state in
/// which its locked rate may be re-derived by the next credit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Units actually recorded as held, excluding interest not yet folded in.
    pub principal: u128,

    /// The rate snapshotted at the most recent zero-to-non-zero transition
    /// (or inherited from a transfer counterparty while at zero balance).
    pub locked_rate: Rate,

    /// When `principal` was last reconciled with accrued interest.
    pub last_update: Timestamp,
}

impl Account {
    /// A fresh zero-balance account, anchored at `at`.
    pub fn new(locked_rate: Rate, at: Timestamp) -> Self {
        Self {
            principal: 0,
            locked_rate,
            last_update: at,
        }
    }

    /// The externally observable balance at `now`, without mutating anything:
    /// `principal * (PRECISION + locked_rate * elapsed) / PRECISION`.
    ///
    /// Always `>= principal`, deterministic, and non-decreasing in `now`.
    /// Returns `None` on arithmetic overflow.
    pub fn projected_balance_checked(&self, now: Timestamp) -> Option<u128> {
        let elapsed = self.last_update.elapsed_since(now);
        let factor = self.locked_rate.checked_growth_factor(elapsed)?;
        self.principal.checked_mul(factor).map(|v| v / PRECISION)
    }

    /// Fold pending interest into `principal` and re-anchor the accrual
    /// window at `now`. `last_update` moves even when no interest was owed.
    ///
    /// Returns the interest materialized, or `None` on overflow (in which
    /// case nothing is mutated).
    pub fn materialize(&mut self, now: Timestamp) -> Option<u128> {
        let projected = self.projected_balance_checked(now)?;
        let interest = projected - self.principal;
        self.principal = projected;
        self.last_update = now;
        Some(interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 5e-8 per second, scaled by 1e18.
    const RATE: u128 = 50_000_000_000;

    fn account_with(principal: u128, at: u64) -> Account {
        let mut acct = Account::new(Rate::new(RATE), Timestamp::new(at));
        acct.principal = principal;
        acct
    }

    #[test]
    fn zero_elapsed_projects_exactly_principal() {
        let acct = account_with(100_000, 1000);
        assert_eq!(
            acct.projected_balance_checked(Timestamp::new(1000)),
            Some(100_000)
        );
    }

    #[test]
    fn projection_grows_linearly_within_a_window() {
        let acct = account_with(1_000_000_000, 0);
        // 1e9 * (1 + 5e-8 * 100) = 1e9 + 5000
        assert_eq!(
            acct.projected_balance_checked(Timestamp::new(100)),
            Some(1_000_005_000)
        );
        assert_eq!(
            acct.projected_balance_checked(Timestamp::new(200)),
            Some(1_000_010_000)
        );
    }

    #[test]
    fn projection_never_below_principal() {
        let acct = account_with(12_345, 500);
        for t in [500u64, 501, 1000, 100_000] {
            let projected = acct.projected_balance_checked(Timestamp::new(t)).unwrap();
            assert!(projected >= acct.principal);
        }
    }

    #[test]
    fn clock_skew_saturates_to_zero_elapsed() {
        let acct = account_with(100_000, 1000);
        // "now" before last_update: no negative accrual, balance == principal
        assert_eq!(
            acct.projected_balance_checked(Timestamp::new(500)),
            Some(100_000)
        );
    }

    #[test]
    fn materialize_folds_interest_and_reanchors() {
        let mut acct = account_with(1_000_000_000, 0);
        let interest = acct.materialize(Timestamp::new(100)).unwrap();
        assert_eq!(interest, 5000);
        assert_eq!(acct.principal, 1_000_005_000);
        assert_eq!(acct.last_update, Timestamp::new(100));
    }

    #[test]
    fn materialize_moves_last_update_even_with_no_interest() {
        let mut acct = Account::new(Rate::new(RATE), Timestamp::new(0));
        let interest = acct.materialize(Timestamp::new(100)).unwrap();
        assert_eq!(interest, 0);
        assert_eq!(acct.last_update, Timestamp::new(100));
    }

    #[test]
    fn materialize_overflow_mutates_nothing() {
        let mut acct = Account::new(Rate::new(u128::MAX), Timestamp::new(0));
        acct.principal = u128::MAX;
        assert!(acct.materialize(Timestamp::new(10)).is_none());
        assert_eq!(acct.principal, u128::MAX);
        assert_eq!(acct.last_update, Timestamp::new(0));
    }

    #[test]
    fn repeated_materialization_compounds_effective_growth() {
        // Each window is linear, but folding interest in re-bases the next
        // window — two half windows beat one full window. Preserved protocol
        // behavior, not a bug.
        let mut stepped = account_with(1_000_000_000_000, 0);
        let straight = account_with(1_000_000_000_000, 0);

        stepped.materialize(Timestamp::new(50_000_000)).unwrap();
        let stepped_bal = stepped
            .projected_balance_checked(Timestamp::new(100_000_000))
            .unwrap();
        let straight_bal = straight
            .projected_balance_checked(Timestamp::new(100_000_000))
            .unwrap();
        assert!(
            stepped_bal > straight_bal,
            "materialized path {stepped_bal} must exceed straight path {straight_bal}"
        );
    }
}
