//! `cabin-field` — the contaminant concentration field and the solvers that
//! produce it.
//!
//! The simulator never computes airflow itself.  It pushes the positions of
//! infected passengers to a [`FieldSolver`] and installs whatever
//! [`ConcentrationField`] comes back.  Two kinds of solver exist:
//!
//! - an external CFD engine, linked in by the application and handed to
//!   [`acquire_or_fallback`] as a launcher closure;
//! - [`GaussianPlumeSolver`], an in-process approximation used whenever the
//!   external engine cannot be acquired.
//!
//! Either way the solver lives inside a [`SolverSession`], which releases it
//! exactly once however the run ends.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`field`]   | `ConcentrationField`, `linspace`                             |
//! | [`solver`]  | `FieldSolver` trait, `FieldRequest`, `SolverKind`            |
//! | [`plume`]   | `GaussianPlumeSolver`, `PlumeParams`                         |
//! | [`session`] | `SolverSession`, `acquire_or_fallback`                       |
//! | [`error`]   | `FieldError`, `FieldResult<T>`                               |

pub mod error;
pub mod field;
pub mod plume;
pub mod session;
pub mod solver;


pub use error::{FieldError, FieldResult};
pub use field::{ConcentrationField, linspace};
pub use plume::{GaussianPlumeSolver, PlumeParams};
pub use session::{SolverSession, acquire_or_fallback};
pub use solver::{FieldRequest, FieldSolver, SolverKind};
