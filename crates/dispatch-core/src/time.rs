//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `TickClock`:
//!
//!   elapsed_ms = tick * tick_interval_ms
//!
//! Using an integer tick as the canonical time unit means the seek stepping
//! is exact (no floating-point drift in the schedule) and comparisons are
//! O(1).  The default interval is 16 ms (~60 Hz, one display frame).  The
//! seek algorithm is cadence-independent in outcome, so any interval up to
//! one second is acceptable — slower cadences only reduce smoothness.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 60 ticks/second a u64 lasts ~9.7
/// billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Tracks the current tick and maps ticks to wall-clock milliseconds.
///
/// `TickClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// How many wall milliseconds one tick represents.  Default: 16 (~60 Hz).
    pub tick_interval_ms: u64,
    /// The current tick — advanced by `TickClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl TickClock {
    /// Default cadence: one tick per display frame (~60 Hz).
    pub const DEFAULT_INTERVAL_MS: u64 = 16;

    /// Create a clock with the given cadence.
    ///
    /// # Errors
    ///
    /// Intervals above 1000 ms violate the ≥1 Hz cadence contract; zero has
    /// no meaning for a timer.
    pub fn new(tick_interval_ms: u64) -> CoreResult<Self> {
        if tick_interval_ms == 0 || tick_interval_ms > 1_000 {
            return Err(CoreError::Params(format!(
                "tick interval must be in 1..=1000 ms, got {tick_interval_ms}"
            )));
        }
        Ok(Self {
            tick_interval_ms,
            current_tick: Tick::ZERO,
        })
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed wall milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms
    }

    /// The tick interval as a [`Duration`], for driving a timer.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self {
            tick_interval_ms: Self::DEFAULT_INTERVAL_MS,
            current_tick: Tick::ZERO,
        }
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} ms)", self.current_tick, self.elapsed_ms())
    }
}
