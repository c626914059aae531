use cabin_geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f64 },

    #[error("requested {requested} passengers but the cabin only has {seats} seats")]
    TooManyAgents { requested: usize, seats: usize },

    #[error("seat assignment failed: {0}")]
    Geometry(#[from] GeometryError),
}

pub type AgentResult<T> = Result<T, AgentError>;
