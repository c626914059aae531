//! Simulation observer trait for progress reporting and data collection.

use cabin_core::Tick;
use cabin_field::{ConcentrationField, FieldError};
use cabin_state::InfectionCounts;

use crate::RunSummary;

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:         Tick,
    /// Seat collisions logged this tick.
    pub contacts:     usize,
    pub new_airborne: usize,
    pub new_surface:  usize,
    /// Infected passengers at the end of the tick.
    pub infected:     usize,
}

/// Periodic infected head-count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProgressReport {
    /// The tick the clock has just reached.
    pub tick:   Tick,
    pub time:   f64,
    pub counts: InfectionCounts,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: infection curve
///
/// ```rust,ignore
/// struct Curve(Vec<(f64, usize)>);
///
/// impl SimObserver for Curve {
///     fn on_progress(&mut self, report: &ProgressReport) {
///         self.0.push((report.time, report.counts.infected));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after transmission, before the clock advances.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called with each newly installed field.
    fn on_field_refresh(&mut self, _tick: Tick, _field: &ConcentrationField) {}

    /// Called when a refresh fails.  The previous field stays installed.
    fn on_field_error(&mut self, _tick: Tick, _error: &FieldError) {}

    /// Called every `config.report_interval_ticks` ticks.
    fn on_progress(&mut self, _report: &ProgressReport) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops, whether it
    /// reached the end tick or was interrupted.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
