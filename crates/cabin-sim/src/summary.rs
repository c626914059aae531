//! End-of-run statistics.

use std::fmt;

use cabin_agent::InfectionRoute;
use cabin_core::Tick;
use cabin_field::SolverKind;

/// Totals reported when a run stops.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Tick the clock stopped at.
    pub final_tick:          Tick,
    pub end_time:            f64,
    /// `true` if the stop flag ended the run before `total_ticks`.
    pub interrupted:         bool,

    pub population:          usize,
    pub initial_infected:    usize,
    pub airborne_infections: usize,
    pub surface_infections:  usize,
    pub final_infected:      usize,

    pub contact_events:      usize,
    pub field_refreshes:     u64,
    pub refresh_failures:    u64,

    pub solver:              SolverKind,
    pub solver_name:         String,
}

impl RunSummary {
    /// Infections that happened during the run.
    #[inline]
    pub fn new_infections(&self) -> usize {
        self.final_infected - self.initial_infected
    }

    /// Infections attributed to `route`.
    pub fn by_route(&self, route: InfectionRoute) -> usize {
        match route {
            InfectionRoute::Initial  => self.initial_infected,
            InfectionRoute::Airborne => self.airborne_infections,
            InfectionRoute::Surface  => self.surface_infections,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} infected of {} (initial {}, airborne {}, surface {}); {} contact events; solver {} ({})",
            self.final_infected,
            self.population,
            self.initial_infected,
            self.airborne_infections,
            self.surface_infections,
            self.contact_events,
            self.solver_name,
            self.solver,
        )
    }
}
