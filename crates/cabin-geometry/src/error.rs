//! Geometry error type.

use thiserror::Error;

use cabin_core::SeatId;

/// Errors produced by `cabin-geometry`.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cabin {name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("cabin must have at least one row")]
    NoRows,

    #[error("seat {0} not found in layout")]
    SeatNotFound(SeatId),

    #[error("seat {0} is already occupied")]
    SeatTaken(SeatId),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
