use std::{cell::Cell, time::Instant};

/// Millisecond time source used to time a render.
pub trait Clock {
    fn current_time(&self) -> u64;
}

/// Milliseconds since the clock was created. Never goes backwards.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn current_time(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that advances by a fixed step on every reading.
///
/// Deterministic stand-in for tests and benches; real runs use [`MonotonicClock`].
#[derive(Debug, Default)]
pub struct SteppingClock {
    now: Cell<u64>,
    step: u64,
}

impl SteppingClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn current_time(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let mut previous = clock.current_time();
        for _ in 0..1000 {
            let now = clock.current_time();
            assert!(now >= previous);
            previous = now;
        }
    }

    #[test]
    fn stepping_clock() {
        let clock = SteppingClock::new(100, 7);
        assert_eq!(clock.current_time(), 100);
        assert_eq!(clock.current_time(), 107);
        assert_eq!(clock.current_time(), 114);
    }
}
