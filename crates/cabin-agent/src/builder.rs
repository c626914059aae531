//! Seeded population generation.
//!
//! # Usage
//!
//! ```rust
//! use cabin_agent::{PopulationBuilder, PopulationConfig};
//! use cabin_core::SimRng;
//! use cabin_geometry::{CabinDimensions, CabinLayout};
//!
//! let mut layout = CabinLayout::build(CabinDimensions::default()).unwrap();
//! let mut rng = SimRng::new(42);
//! let agents = PopulationBuilder::new(PopulationConfig::default())
//!     .build(&mut layout, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(agents.len(), 218); // floor(243 × 0.9)
//! assert_eq!(layout.occupied_count(), 218);
//! ```

use cabin_core::{AgentId, SeatId, SimRng};
use cabin_geometry::CabinLayout;

use crate::{Agent, AgentError, AgentResult, AgentStore, InfectionRoute};

/// Who boards, and how many of them are already sick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationConfig {
    /// Fraction of seats filled.  Default: 0.9.
    pub occupancy: f64,

    /// Exact passenger count; overrides `occupancy` when set.
    pub agent_count: Option<usize>,

    /// Per-passenger probability of boarding infected.  Default: 0.05.
    pub initial_infection_probability: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            occupancy:                     0.9,
            agent_count:                   None,
            initial_infection_probability: 0.05,
        }
    }
}

impl PopulationConfig {
    /// Passenger count for a cabin with `seats` seats.
    pub fn resolve_count(&self, seats: usize) -> AgentResult<usize> {
        check_fraction("occupancy", self.occupancy)?;
        check_fraction("initial_infection_probability", self.initial_infection_probability)?;

        let requested = self
            .agent_count
            .unwrap_or_else(|| (seats as f64 * self.occupancy).floor() as usize);
        if requested > seats {
            return Err(AgentError::TooManyAgents { requested, seats });
        }
        Ok(requested)
    }
}

fn check_fraction(name: &'static str, value: f64) -> AgentResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AgentError::InvalidFraction { name, value })
    }
}

/// Builds the passenger arena and marks their seats occupied.
pub struct PopulationBuilder {
    config:         PopulationConfig,
    infection_time: f64,
}

impl PopulationBuilder {
    pub fn new(config: PopulationConfig) -> Self {
        Self { config, infection_time: 0.0 }
    }

    /// Timestamp recorded on passengers who board infected.  Default: 0.
    pub fn infection_time(mut self, time: f64) -> Self {
        self.infection_time = time;
        self
    }

    /// Pick seats uniformly without replacement, then draw each passenger's
    /// initial infection, both from `rng`.
    ///
    /// Passenger ids follow the order in which seats were drawn.
    pub fn build(self, layout: &mut CabinLayout, rng: &mut SimRng) -> AgentResult<AgentStore> {
        let count = self.config.resolve_count(layout.seat_count())?;
        let picked = rng.sample_indices(layout.seat_count(), count);

        let mut agents = Vec::with_capacity(count);
        for (i, &seat_index) in picked.iter().enumerate() {
            let seat = SeatId(seat_index as u32);
            layout.occupy(seat)?;
            let position = layout.seats()[seat_index].position;
            agents.push(Agent::seated(AgentId(i as u32), seat, position));
        }

        let p = self.config.initial_infection_probability;
        for agent in &mut agents {
            if rng.chance(p) {
                agent.infect(self.infection_time, InfectionRoute::Initial);
            }
        }

        Ok(AgentStore::new(agents))
    }
}
