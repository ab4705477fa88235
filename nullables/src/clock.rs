//! Nullable clock — deterministic time for testing accrual windows.

use rbx_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Interest accrual is a pure function of elapsed seconds, so tests drive
/// growth by advancing this clock rather than sleeping.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// The current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get() + secs);
    }

    /// Jump directly to a timestamp. Moving backwards is allowed; accrual
    /// code must treat a backwards clock as zero elapsed time.
    pub fn set(&self, at: Timestamp) {
        self.current.set(at.as_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_only_on_demand() {
        let clock = NullClock::new(100);
        assert_eq!(clock.now(), Timestamp::new(100));
        clock.advance(50);
        assert_eq!(clock.now(), Timestamp::new(150));
    }

    #[test]
    fn set_may_move_backwards() {
        let clock = NullClock::new(500);
        clock.set(Timestamp::new(10));
        assert_eq!(clock.now(), Timestamp::new(10));
    }
}
