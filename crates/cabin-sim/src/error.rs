use cabin_core::CoreError;
use cabin_field::FieldError;
use cabin_movement::MovementError;
use cabin_state::StateError;
use cabin_transmission::TransmissionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("cabin setup failed: {0}")]
    State(#[from] StateError),

    #[error("invalid movement parameters: {0}")]
    Movement(#[from] MovementError),

    #[error("invalid transmission parameters: {0}")]
    Transmission(#[from] TransmissionError),

    #[error("field solver error: {0}")]
    Solver(#[from] FieldError),
}

pub type SimResult<T> = Result<T, SimError>;
