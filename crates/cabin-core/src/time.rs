//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing integer `Tick`.  Simulated time in
//! cabin time units (seconds for the default configuration) is derived from
//! it:
//!
//!   now = tick * tick_duration
//!
//! Keeping the tick integral means refresh and reporting cadences are exact
//! modulo checks; only the derived `now()` is floating point, and it is what
//! contact events and infection timestamps record.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` on every `interval`-th tick, starting with tick 0.  An interval
    /// of zero never fires.
    #[inline]
    pub fn is_on_interval(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated time units.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated time units per tick.  Default: 1.0 (one second).
    pub tick_duration: f64,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration: f64) -> Self {
        Self {
            tick_duration,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Simulated time at the current tick.
    #[inline]
    pub fn now(&self) -> f64 {
        self.time_at(self.current_tick)
    }

    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.tick_duration
    }

    /// Break elapsed time into (hours, minutes, seconds) for log lines.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.now().max(0.0) as u64;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        SimClock::new(1.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: length, resolution, seed, and driver cadences.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.  One simulated hour at 1 s/tick: 3600.
    pub total_ticks: u64,

    /// Simulated time units per tick.
    pub tick_duration: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ask the field solver for a fresh concentration field every N ticks
    /// (tick 0 included).  0 disables refreshes.
    pub field_refresh_interval_ticks: u64,

    /// Iteration hint passed to the solver on each refresh.
    pub solver_iterations: u32,

    /// Emit an infected-count progress report every N ticks.  0 disables.
    pub report_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:                  3_600,
            tick_duration:                1.0,
            seed:                         42,
            field_refresh_interval_ticks: 60,
            solver_iterations:            50,
            report_interval_ticks:        300,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tick_duration.is_finite() && self.tick_duration > 0.0) {
            return Err(CoreError::Config(format!(
                "tick_duration must be positive, got {}",
                self.tick_duration
            )));
        }
        Ok(())
    }
}
