//! The field-solver capability.
//!
//! # Pluggability
//!
//! `cabin-sim` talks to the solver only through [`FieldSolver`], so the
//! external CFD engine and the in-process fallback are interchangeable and
//! the tick loop cannot tell which one is running.  The active kind is
//! still reported (see [`SolverKind`]) so drivers can surface a
//! substitution.

use cabin_core::Point2;

use crate::{ConcentrationField, FieldResult};

/// Parameters for one field computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldRequest {
    /// Simulated time the field is requested for.
    pub time:       f64,
    /// Solver iteration hint.  Solvers without an iterative scheme ignore it.
    pub iterations: u32,
}

/// A source of concentration fields.
///
/// Implementations must not assume anything about call order beyond
/// "`push_sources` before the `compute_field` it should affect"; the driver
/// calls both on every refresh.
pub trait FieldSolver {
    /// Short name for log lines and run summaries.
    fn name(&self) -> &str;

    /// Replace the set of contamination sources with `sources`.
    fn push_sources(&mut self, sources: &[Point2]) -> FieldResult<()>;

    /// Produce a fresh field covering the cabin.
    fn compute_field(&mut self, request: &FieldRequest) -> FieldResult<ConcentrationField>;

    /// Tear down any external resource.
    ///
    /// Must be idempotent.  [`SolverSession`](crate::SolverSession)
    /// guarantees a single call per session.
    fn release(&mut self) -> FieldResult<()>;
}

impl<S: FieldSolver + ?Sized> FieldSolver for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn push_sources(&mut self, sources: &[Point2]) -> FieldResult<()> {
        (**self).push_sources(sources)
    }

    fn compute_field(&mut self, request: &FieldRequest) -> FieldResult<ConcentrationField> {
        (**self).compute_field(request)
    }

    fn release(&mut self) -> FieldResult<()> {
        (**self).release()
    }
}

/// Which solver a session ended up with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverKind {
    /// The external CFD engine.
    External,
    /// The in-process Gaussian plume approximation.
    Fallback,
}

impl SolverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SolverKind::External => "external",
            SolverKind::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
