//! # Fix Clock
//!
//! Source of the monotonic timestamps stamped on time and position fixes.

use std::time::Instant;

/// A monotonic millisecond clock.
///
/// Any `Fn() -> u64` closure is a clock, which makes deterministic clocks easy
/// to plug in:
///
/// ```rust
/// use nmea0183_stream::ParserBuilder;
///
/// let parser = ParserBuilder::new().clock(|| 42u64).build();
/// assert_eq!(parser.fix().last_position_fix(), None);
/// ```
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now(&self) -> u64 {
        self()
    }
}

/// Milliseconds since the clock was created, backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
