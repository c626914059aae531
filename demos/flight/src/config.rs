//! TOML run configuration.
//!
//! Every section and key is optional; anything missing keeps its default.
//!
//! ```toml
//! [sim]
//! total_ticks = 3600
//! seed = 7
//!
//! [cabin.population]
//! occupancy = 0.8
//!
//! [solver]
//! backend = "external"
//! mesh_path = "aircabin.msh"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cabin_core::SimConfig;
use cabin_field::PlumeParams;
use cabin_movement::MovementParams;
use cabin_state::CabinConfig;
use cabin_transmission::TransmissionParams;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Use the in-process Gaussian plume.
    #[default]
    Fallback,
    /// Try the external CFD engine first.
    External,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub backend:   Backend,
    /// Mesh handed to the external engine.
    pub mesh_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub sim:          SimConfig,
    pub cabin:        CabinConfig,
    pub movement:     MovementParams,
    pub transmission: TransmissionParams,
    pub plume:        PlumeParams,
    pub solver:       SolverConfig,
}

impl FlightConfig {
    /// Read `path`, or use defaults throughout when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}
