//! The `Cabin` aggregate.

use cabin_agent::{Agent, AgentStore, PopulationBuilder, PopulationConfig};
use cabin_core::{AgentId, Point2, SeatId, Section, SimClock, SimRng};
use cabin_field::ConcentrationField;
use cabin_geometry::{CabinDimensions, CabinLayout, Seat};
use tracing::{debug, info};

use crate::{ContactLog, StateResult};

/// Geometry plus population: everything needed to board a cabin.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CabinConfig {
    pub dimensions: CabinDimensions,
    pub population: PopulationConfig,
}

/// Infected head-count, split by section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InfectionCounts {
    pub population: usize,
    pub infected:   usize,
    pub front:      usize,
    pub rear:       usize,
}

/// Owned simulation state.
///
/// Fields are `pub` so the movement and transmission crates can split
/// borrows (e.g. `&cabin.layout` alongside `&mut cabin.agents`).
pub struct Cabin {
    /// Seats and fixed reference points.
    pub layout: CabinLayout,

    /// Passenger arena, indexed by `AgentId`.
    pub agents: AgentStore,

    /// Current tick and simulated time.
    pub clock: SimClock,

    /// Latest concentration field, if the solver has produced one yet.
    pub field: Option<ConcentrationField>,

    /// Every seat collision so far.
    pub contacts: ContactLog,
}

impl Cabin {
    /// Generate the layout and board a random population drawn from `rng`.
    pub fn build(config: &CabinConfig, clock: SimClock, rng: &mut SimRng) -> StateResult<Self> {
        let mut layout = CabinLayout::build(config.dimensions.clone())?;
        let agents = PopulationBuilder::new(config.population.clone())
            .infection_time(clock.now())
            .build(&mut layout, rng)?;

        info!(
            seats = layout.seat_count(),
            passengers = agents.len(),
            initially_infected = agents.infected_count(),
            front_rows = config.dimensions.front_rows,
            rear_rows = config.dimensions.rear_rows,
            "cabin boarded"
        );
        Ok(Self::from_parts(layout, agents, clock))
    }

    /// Board one healthy passenger per entry of `seats`, in order.  Useful
    /// for hand-built scenarios.
    pub fn with_seated(dimensions: CabinDimensions, seats: &[SeatId], clock: SimClock) -> StateResult<Self> {
        let mut layout = CabinLayout::build(dimensions)?;
        let mut agents = Vec::with_capacity(seats.len());
        for (i, &seat) in seats.iter().enumerate() {
            layout.occupy(seat)?;
            let position = layout.seats()[seat.index()].position;
            agents.push(Agent::seated(AgentId(i as u32), seat, position));
        }
        Ok(Self::from_parts(layout, AgentStore::new(agents), clock))
    }

    /// Assemble a cabin from already-consistent parts.
    pub fn from_parts(layout: CabinLayout, agents: AgentStore, clock: SimClock) -> Self {
        debug_assert_eq!(
            layout.occupied_count(),
            agents.len(),
            "every occupied seat must belong to exactly one passenger"
        );
        Self { layout, agents, clock, field: None, contacts: ContactLog::new() }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// `None` for unknown ids; callers treat that as a no-op.
    #[inline]
    pub fn agent_by_id(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    #[inline]
    pub fn agent_by_id_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    pub fn seat_of(&self, id: AgentId) -> Option<&Seat> {
        self.agents.get(id).and_then(|a| self.layout.seat(a.seat))
    }

    pub fn section_of(&self, id: AgentId) -> Option<Section> {
        self.seat_of(id).map(|s| s.section)
    }

    // ── Concentration field ───────────────────────────────────────────────

    /// Replace the current field.
    pub fn install_field(&mut self, field: ConcentrationField) {
        debug!(
            timestamp = field.timestamp(),
            peak = field.max_value(),
            "concentration field installed"
        );
        self.field = Some(field);
    }

    /// Concentration at `p`; zero until a field has been installed.
    pub fn concentration_at(&self, p: Point2) -> f64 {
        self.field.as_ref().map_or(0.0, |f| f.sample(p))
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    pub fn infection_counts(&self) -> InfectionCounts {
        let mut counts = InfectionCounts { population: self.agents.len(), ..InfectionCounts::default() };
        for agent in self.agents.iter().filter(|a| a.is_infected()) {
            counts.infected += 1;
            match self.layout.seat(agent.seat).map(|s| s.section) {
                Some(Section::Front) => counts.front += 1,
                Some(Section::Rear)  => counts.rear += 1,
                None => {}
            }
        }
        counts
    }
}
