use cabin_agent::AgentError;
use cabin_geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("cabin geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("passenger population: {0}")]
    Population(#[from] AgentError),
}

pub type StateResult<T> = Result<T, StateError>;
