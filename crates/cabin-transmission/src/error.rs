use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransmissionError {
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("{name} must be non-negative and finite, got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("bucket_decimals must be within 0..={max}, got {value}")]
    InvalidDecimals { value: i32, max: i32 },
}

pub type TransmissionResult<T> = Result<T, TransmissionError>;
