//! Think-time clocks
//!
//! The bot pauses before answering to look like it is thinking. The pause goes
//! through a `Clock` so games can run at full speed in tests and benchmarks.

use std::thread;
use std::time::{Duration, Instant};

/// Source of the bot's simulated thinking delay
pub trait Clock {
    /// Pause for roughly `duration` and report how long the pause took
    fn pause(&mut self, duration: Duration) -> Duration;
}

/// Really sleeps and measures the wall-clock time spent
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn pause(&mut self, duration: Duration) -> Duration {
        let start = Instant::now();
        thread::sleep(duration);
        start.elapsed()
    }
}

/// Returns immediately, reporting the requested duration as elapsed
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn pause(&mut self, duration: Duration) -> Duration {
        duration
    }
}

/// Either clock, picked at runtime (e.g. from a `--no-delay` flag)
#[derive(Debug, Clone, Copy)]
pub enum ClockType {
    System(SystemClock),
    Instant(InstantClock),
}

impl ClockType {
    #[must_use]
    pub const fn from_delay(delay: bool) -> Self {
        if delay {
            Self::System(SystemClock)
        } else {
            Self::Instant(InstantClock)
        }
    }
}

impl Clock for ClockType {
    fn pause(&mut self, duration: Duration) -> Duration {
        match self {
            Self::System(c) => c.pause(duration),
            Self::Instant(c) => c.pause(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_clock_reports_requested_duration() {
        let mut clock = InstantClock;
        assert_eq!(
            clock.pause(Duration::from_millis(750)),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn system_clock_waits_at_least_requested() {
        let mut clock = SystemClock;
        let elapsed = clock.pause(Duration::from_millis(5));
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn clock_type_from_delay_flag() {
        assert!(matches!(ClockType::from_delay(true), ClockType::System(_)));
        let mut clock = ClockType::from_delay(false);
        assert_eq!(clock.pause(Duration::from_secs(3)), Duration::from_secs(3));
    }
}
