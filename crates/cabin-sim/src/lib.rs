//! `cabin-sim` — tick loop orchestrator for the cabin transmission simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Movement     — every passenger decides, then steps (ascending AgentId).
//!   ② Field        — on every `field_refresh_interval_ticks`-th tick
//!                    (tick 0 included): push infected positions to the
//!                    solver, compute a field, install it.  A failure keeps
//!                    the previous field.
//!   ③ Transmission — airborne channel, then surface channel.
//!   ④ Clock        — advance; on every `report_interval_ticks`-th tick
//!                    report infected counts.
//! ```
//!
//! The field solver lives in a [`SolverSession`][cabin_field::SolverSession]
//! owned by the [`Sim`]; it is released exactly once whether the run ends,
//! is interrupted, returns early, or unwinds.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cabin_core::SimConfig;
//! use cabin_field::{GaussianPlumeSolver, PlumeParams, SolverKind, SolverSession};
//! use cabin_sim::{NoopObserver, SimBuilder};
//!
//! let solver = GaussianPlumeSolver::new(40.0, 6.0, PlumeParams::default())?;
//! let session = SolverSession::new(solver, SolverKind::Fallback);
//! let mut sim = SimBuilder::new(SimConfig::default(), session).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! sim.finish()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ProgressReport, SimObserver, TickReport};
pub use sim::Sim;
pub use summary::RunSummary;
