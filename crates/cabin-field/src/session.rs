//! Scoped ownership of a field solver.

use cabin_core::Point2;
use tracing::{info, warn};

use crate::{
    ConcentrationField, FieldError, FieldRequest, FieldResult, FieldSolver, GaussianPlumeSolver,
    SolverKind,
};

/// Owns a solver for the length of a run and releases it exactly once.
///
/// Release happens on [`close`](Self::close) or, if the session is dropped
/// first (early return, interrupt, unwinding panic), in `Drop`.  Calls made
/// after release fail with [`FieldError::Released`] instead of reaching the
/// solver.
pub struct SolverSession<S: FieldSolver> {
    solver:   S,
    kind:     SolverKind,
    released: bool,
}

impl<S: FieldSolver> SolverSession<S> {
    pub fn new(solver: S, kind: SolverKind) -> Self {
        Self { solver, kind, released: false }
    }

    #[inline]
    pub fn kind(&self) -> SolverKind {
        self.kind
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn push_sources(&mut self, sources: &[Point2]) -> FieldResult<()> {
        if self.released {
            return Err(FieldError::Released);
        }
        self.solver.push_sources(sources)
    }

    pub fn compute_field(&mut self, request: &FieldRequest) -> FieldResult<ConcentrationField> {
        if self.released {
            return Err(FieldError::Released);
        }
        self.solver.compute_field(request)
    }

    /// Release the solver now and report the outcome.
    pub fn close(mut self) -> FieldResult<()> {
        self.release_once()
    }

    fn release_once(&mut self) -> FieldResult<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.solver.release()
    }
}

impl<S: FieldSolver> Drop for SolverSession<S> {
    fn drop(&mut self) {
        if let Err(e) = self.release_once() {
            warn!(solver = self.solver.name(), error = %e, "field solver release failed");
        }
    }
}

/// Start a session on the external solver produced by `launch`, or on
/// `fallback` if launching fails.
///
/// The substitution is logged and visible through
/// [`SolverSession::kind`]; nothing downstream changes behaviour.
pub fn acquire_or_fallback<F>(launch: F, fallback: GaussianPlumeSolver) -> SolverSession<Box<dyn FieldSolver>>
where
    F: FnOnce() -> FieldResult<Box<dyn FieldSolver>>,
{
    match launch() {
        Ok(solver) => {
            info!(solver = solver.name(), "connected to external field solver");
            SolverSession::new(solver, SolverKind::External)
        }
        Err(e) => {
            warn!(error = %e, "external field solver unavailable, using Gaussian plume fallback");
            SolverSession::new(Box::new(fallback), SolverKind::Fallback)
        }
    }
}
