//! Time management for the monitor
//!
//! Provides a clock abstraction so readings can be stamped from:
//! - The system wall clock (std)
//! - A fixed, manually advanced clock (tests, replay)
//!
//! Readings in the window must carry non-decreasing timestamps. Wall clocks
//! can step backwards (NTP adjustment), so `TimeManager` never hands out a
//! timestamp earlier than the last one it issued.

use crate::constants::defaults::MS_PER_SECOND;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock frozen at `timestamp` until moved
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute time
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance by milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }

    /// Advance by whole seconds
    pub fn advance_secs(&mut self, secs: u64) {
        self.advance(secs * MS_PER_SECOND);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Wraps a time source and guarantees non-decreasing timestamps
#[derive(Debug, Clone)]
pub struct TimeManager<C: TimeSource> {
    source: C,
    last_known: Timestamp,
}

impl<C: TimeSource> TimeManager<C> {
    /// Wrap a time source
    pub fn new(source: C) -> Self {
        Self {
            source,
            last_known: 0,
        }
    }

    /// Current time, held at the last issued value if the source went backwards
    pub fn now(&mut self) -> Timestamp {
        let current = self.source.now();

        if current < self.last_known {
            log_warn!(
                "clock went backwards by {} ms; holding timestamp",
                self.last_known - current
            );
            return self.last_known;
        }

        self.last_known = current;
        current
    }

    /// Read the clock without recording the value
    pub fn peek(&self) -> Timestamp {
        self.source.now().max(self.last_known)
    }

    /// Underlying time source
    pub fn source(&self) -> &C {
        &self.source
    }

    /// Underlying time source, for adjusting test clocks
    pub fn source_mut(&mut self) -> &mut C {
        &mut self.source
    }
}

/// Milliseconds elapsed between two timestamps (zero if `later` is earlier)
pub fn delta_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Convert a (fractional) number of seconds into whole milliseconds
pub fn secs_to_ms(secs: f64) -> u64 {
    libm::round(secs * MS_PER_SECOND as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.advance_secs(2);
        assert_eq!(time.now(), 3500);
    }

    #[test]
    fn manager_holds_time_when_clock_goes_backwards() {
        let mut manager = TimeManager::new(FixedTime::new(10_000));
        assert_eq!(manager.now(), 10_000);

        manager.source_mut().set(4_000);
        assert_eq!(manager.now(), 10_000);
        assert_eq!(manager.peek(), 10_000);

        manager.source_mut().set(12_000);
        assert_eq!(manager.now(), 12_000);
    }

    #[test]
    fn second_conversion() {
        assert_eq!(secs_to_ms(5.0), 5_000);
        assert_eq!(secs_to_ms(0.25), 250);
        assert_eq!(delta_ms(2_000, 1_000), 0);
        assert_eq!(delta_ms(1_000, 2_500), 1_500);
    }
}
