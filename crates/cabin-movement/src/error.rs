use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("{name} must be positive and finite, got {value}")]
    InvalidDistance { name: &'static str, value: f64 },
}

pub type MovementResult<T> = Result<T, MovementError>;
