//! Elapsed-seconds clock driven by the caller.
//!
//! The crate never spawns a timer. Whoever owns the session forwards one
//! [`GameClock::tick`] per second from its own timer; ticks while the clock
//! is stopped are dropped, so pausing and cancelling are just state changes.

use serde::{Deserialize, Serialize};

/// A pausable seconds counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    running: bool,
    seconds_elapsed: u64,
}

impl GameClock {
    /// Create a stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting. Elapsed time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flip between running and stopped. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Stop and zero the clock.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one second if running. Returns whether it counted.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.seconds_elapsed += 1;
        }
        self.running
    }

    /// Whether ticks are being counted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds counted so far.
    #[must_use]
    pub fn seconds_elapsed(&self) -> u64 {
        self.seconds_elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_only_count_while_running() {
        let mut clock = GameClock::new();
        assert!(!clock.tick());
        assert_eq!(clock.seconds_elapsed(), 0);

        clock.start();
        assert!(clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.seconds_elapsed(), 2);

        clock.stop();
        clock.tick();
        assert_eq!(clock.seconds_elapsed(), 2);
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut clock = GameClock::new();
        assert!(clock.toggle());
        clock.tick();
        assert!(!clock.toggle());
        assert_eq!(clock.seconds_elapsed(), 1);

        clock.start();
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.seconds_elapsed(), 0);
    }
}
