//! Timestamp sources for filters that are not given explicit sample times

use crate::common::types::Timestamp;
use std::time::Instant;

/// Source of monotonic timestamps, in seconds
pub trait Clock {
    fn now(&mut self) -> Timestamp;
}

/// Seconds elapsed since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct ElapsedClock {
    start: Instant,
}

impl ElapsedClock {
    pub fn new() -> Self {
        ElapsedClock {
            start: Instant::now(),
        }
    }
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ElapsedClock {
    fn now(&mut self) -> Timestamp {
        self.start.elapsed().as_secs_f64()
    }
}

/// Deterministic clock advancing by a fixed step on every reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepClock {
    next: Timestamp,
    step: f64,
}

impl FixedStepClock {
    pub fn new(start: Timestamp, step: f64) -> Self {
        FixedStepClock { next: start, step }
    }

    /// A clock starting at zero that ticks at `frequency` Hz
    pub fn from_frequency(frequency: f64) -> Self {
        Self::new(0.0, 1.0 / frequency)
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> Timestamp {
        let now = self.next;
        self.next += self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_clock_is_monotonic() {
        let mut clock = ElapsedClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(1.0, 0.5);
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.now(), 1.5);
        assert_eq!(clock.now(), 2.0);

        let mut clock = FixedStepClock::from_frequency(4.0);
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.now(), 0.25);
    }
}
