#![forbid(unsafe_code)]

//! Fixed-interval row reconciliation.
//!
//! The change queue is the primary signal, but hosts that render rows
//! from periodic snapshots (the original design) can drive that loop off
//! this clock instead. The host supplies `now`, so tests never sleep.

use web_time::{Duration, Instant};

/// Interval at which rows re-read their display state when polling.
pub const RECONCILE_INTERVAL: Duration = Duration::from_millis(100);

/// Decides when a polling host should re-read row state.
#[derive(Debug, Clone)]
pub struct ReconcileClock {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for ReconcileClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconcileClock {
    /// Clock at the standard interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interval: RECONCILE_INTERVAL,
            last: None,
        }
    }

    /// Override the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when a full interval has elapsed since the last granted
    /// tick. The first call always ticks.
    pub fn should_reconcile(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_ticks() {
        let mut clock = ReconcileClock::new();
        assert!(clock.should_reconcile(Instant::now()));
    }

    #[test]
    fn ticks_are_gated_by_the_interval() {
        let mut clock = ReconcileClock::new();
        let start = Instant::now();
        assert!(clock.should_reconcile(start));
        assert!(!clock.should_reconcile(start + Duration::from_millis(40)));
        assert!(!clock.should_reconcile(start + Duration::from_millis(99)));
        assert!(clock.should_reconcile(start + Duration::from_millis(100)));
        assert!(!clock.should_reconcile(start + Duration::from_millis(150)));
    }

    #[test]
    fn custom_interval_is_honored() {
        let mut clock = ReconcileClock::new().with_interval(Duration::from_millis(250));
        let start = Instant::now();
        assert!(clock.should_reconcile(start));
        assert!(!clock.should_reconcile(start + Duration::from_millis(100)));
        assert!(clock.should_reconcile(start + Duration::from_millis(250)));
    }
}
