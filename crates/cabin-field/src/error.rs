//! Field and solver error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("field grid axis `{0}` has no sample points")]
    EmptyAxis(&'static str),

    #[error("field has {got} values but the grid needs {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("field grid axis `{0}` contains a non-finite coordinate")]
    NonFiniteAxis(&'static str),

    #[error("invalid plume parameter {name}: {value}")]
    InvalidPlume { name: &'static str, value: f64 },

    #[error("field solver unavailable: {0}")]
    Unavailable(String),

    #[error("field solver failed: {0}")]
    Solver(String),

    #[error("field solver session already released")]
    Released,
}

pub type FieldResult<T> = Result<T, FieldError>;
