//! The rate governor — owns the single global interest-rate parameter.

use crate::error::GovernorError;
use rbx_types::{AccountAddress, LedgerEvent, Rate, Timestamp};
use serde::{Deserialize, Serialize};

/// One accepted rate change, kept for auditability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateChange {
    pub rate: Rate,
    pub at: Timestamp,
    pub version: u64,
}

/// Owns `current_rate` and enforces the monotonicity invariant at its single
/// mutation entry point.
///
/// New accounts lock in the rate that is current at their first credit, so
/// lowering the global rate never touches existing accounts — a rate change
/// here is O(1) and no per-account state is rewritten.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateGovernor {
    authority: AccountAddress,
    current: Rate,
    version: u64,
    history: Vec<RateChange>,
    #[serde(skip)]
    events: Vec<LedgerEvent>,
}

impl RateGovernor {
    /// Create a governor at ledger genesis with a non-zero initial rate.
    pub fn new(authority: AccountAddress, initial_rate: Rate, genesis: Timestamp) -> Self {
        Self {
            authority,
            current: initial_rate,
            version: 0,
            history: vec![RateChange {
                rate: initial_rate,
                at: genesis,
                version: 0,
            }],
            events: Vec::new(),
        }
    }

    /// Replace the global rate. Fails without mutation if the caller is not
    /// the authority or if the new rate is higher than the current one.
    /// Equal values are accepted (a no-op lowering).
    pub fn set_rate(
        &mut self,
        caller: &AccountAddress,
        new_rate: Rate,
        now: Timestamp,
    ) -> Result<(), GovernorError> {
        if *caller != self.authority {
            return Err(GovernorError::Unauthorized(caller.to_string()));
        }
        if new_rate > self.current {
            return Err(GovernorError::RateIncreaseRejected {
                requested: new_rate,
                current: self.current,
            });
        }
        let previous = self.current;
        self.current = new_rate;
        self.version += 1;
        self.history.push(RateChange {
            rate: new_rate,
            at: now,
            version: self.version,
        });
        self.events.push(LedgerEvent::RateChanged {
            previous,
            current: new_rate,
            version: self.version,
        });
        tracing::info!(%previous, current = %new_rate, version = self.version, "global rate lowered");
        Ok(())
    }

    /// The rate assigned to fresh accounts at their first credit.
    pub fn current_rate(&self) -> Rate {
        self.current
    }

    /// How many times the rate has been changed since genesis.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Every accepted rate, oldest first (genesis entry included).
    pub fn history(&self) -> &[RateChange] {
        &self.history
    }

    /// Drain audit events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authority() -> AccountAddress {
        AccountAddress::new("rbx_governance")
    }

    fn make_governor(initial: u128) -> RateGovernor {
        RateGovernor::new(authority(), Rate::new(initial), Timestamp::EPOCH)
    }

    #[test]
    fn genesis_rate_is_current() {
        let gov = make_governor(50_000_000_000);
        assert_eq!(gov.current_rate(), Rate::new(50_000_000_000));
        assert_eq!(gov.version(), 0);
        assert_eq!(gov.history().len(), 1);
    }

    #[test]
    fn lowering_the_rate_is_accepted() {
        let mut gov = make_governor(50_000_000_000);
        gov.set_rate(&authority(), Rate::new(40_000_000_000), Timestamp::new(100))
            .unwrap();
        assert_eq!(gov.current_rate(), Rate::new(40_000_000_000));
        assert_eq!(gov.version(), 1);
        assert_eq!(gov.history().len(), 2);
    }

    #[test]
    fn raising_the_rate_is_rejected_without_mutation() {
        let mut gov = make_governor(40_000_000_000);
        let result = gov.set_rate(&authority(), Rate::new(50_000_000_000), Timestamp::new(100));
        match result.unwrap_err() {
            GovernorError::RateIncreaseRejected { requested, current } => {
                assert_eq!(requested, Rate::new(50_000_000_000));
                assert_eq!(current, Rate::new(40_000_000_000));
            }
            other => panic!("expected RateIncreaseRejected, got {other:?}"),
        }
        assert_eq!(gov.current_rate(), Rate::new(40_000_000_000));
        assert_eq!(gov.version(), 0);
    }

    #[test]
    fn equal_rate_is_a_noop_lowering() {
        let mut gov = make_governor(40_000_000_000);
        gov.set_rate(&authority(), Rate::new(40_000_000_000), Timestamp::new(100))
            .unwrap();
        assert_eq!(gov.current_rate(), Rate::new(40_000_000_000));
        assert_eq!(gov.version(), 1);
    }

    #[test]
    fn non_authority_caller_is_rejected() {
        let mut gov = make_governor(40_000_000_000);
        let intruder = AccountAddress::new("rbx_mallory");
        let result = gov.set_rate(&intruder, Rate::new(10), Timestamp::new(100));
        assert!(matches!(result, Err(GovernorError::Unauthorized(_))));
        assert_eq!(gov.current_rate(), Rate::new(40_000_000_000));
    }

    #[test]
    fn accepted_rates_are_monotone_non_increasing() {
        let mut gov = make_governor(100);
        let attempts = [90u128, 95, 80, 80, 120, 10];
        for raw in attempts {
            let _ = gov.set_rate(&authority(), Rate::new(raw), Timestamp::new(1));
        }
        let history = gov.history();
        for pair in history.windows(2) {
            assert!(pair[1].rate <= pair[0].rate);
        }
        assert_eq!(gov.current_rate(), Rate::new(10));
    }

    #[test]
    fn rate_change_event_is_recorded_once() {
        let mut gov = make_governor(100);
        gov.set_rate(&authority(), Rate::new(50), Timestamp::new(5))
            .unwrap();
        let events = gov.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            LedgerEvent::RateChanged { version: 1, .. }
        ));
        assert!(gov.drain_events().is_empty());
    }
}
