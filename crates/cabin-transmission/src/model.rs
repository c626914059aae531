//! The two infection channels.

use cabin_agent::InfectionRoute;
use cabin_core::{AgentId, Point2, SimRng};
use cabin_state::Cabin;
use indexmap::IndexMap;
use tracing::debug;

use crate::TransmissionParams;

/// A contact position rounded onto the grouping grid, in units of
/// `10^-decimals`.
pub type BucketKey = (i64, i64);

/// Who was infected this tick, by channel, in the order it happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransmissionOutcome {
    pub airborne: Vec<AgentId>,
    pub surface:  Vec<AgentId>,
}

impl TransmissionOutcome {
    #[inline]
    pub fn total(&self) -> usize {
        self.airborne.len() + self.surface.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct TransmissionModel {
    params: TransmissionParams,
}

impl TransmissionModel {
    pub fn new(params: TransmissionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TransmissionParams {
        &self.params
    }

    /// Apply the airborne channel, then the surface channel, at the cabin's
    /// current time.
    pub fn update(&self, cabin: &mut Cabin, rng: &mut SimRng) -> TransmissionOutcome {
        let airborne = self.airborne(cabin, rng);
        let surface = self.surface(cabin, rng);
        TransmissionOutcome { airborne, surface }
    }

    /// Infection probability for one tick spent at concentration `c`.
    #[inline]
    pub fn airborne_probability(&self, concentration: f64) -> f64 {
        1.0 - (-self.params.airborne_rate * concentration).exp()
    }

    /// Grouping key for a contact at `p`.  Halves round to even.
    pub fn bucket_key(&self, p: Point2) -> BucketKey {
        let scale = 10f64.powi(self.params.bucket_decimals);
        ((p.x * scale).round_ties_even() as i64, (p.y * scale).round_ties_even() as i64)
    }

    // ── Channels ──────────────────────────────────────────────────────────

    fn airborne(&self, cabin: &mut Cabin, rng: &mut SimRng) -> Vec<AgentId> {
        let Some(field) = cabin.field.as_ref() else {
            return Vec::new();
        };
        let now = cabin.clock.now();
        let mut infected = Vec::new();

        for agent in cabin.agents.iter_mut().filter(|a| !a.is_infected()) {
            let p = self.airborne_probability(field.sample(agent.position));
            if rng.chance(p) && agent.infect(now, InfectionRoute::Airborne) {
                debug!(agent = %agent.id, time = now, "airborne infection");
                infected.push(agent.id);
            }
        }
        infected
    }

    fn surface(&self, cabin: &mut Cabin, rng: &mut SimRng) -> Vec<AgentId> {
        let now = cabin.clock.now();

        // Groups keep the order in which their first event was logged.
        let mut buckets: IndexMap<BucketKey, Vec<AgentId>> = IndexMap::new();
        for event in cabin.contacts.recent(now, self.params.surface_window) {
            buckets.entry(self.bucket_key(event.position)).or_default().push(event.agent);
        }

        let mut infected = Vec::new();
        for entries in buckets.values() {
            // Evaluated per group, so infections from earlier groups count.
            let exposed = entries
                .iter()
                .any(|&id| cabin.agent_by_id(id).is_some_and(|a| a.is_infected()));
            if !exposed {
                continue;
            }
            for &id in entries {
                let Some(agent) = cabin.agent_by_id_mut(id) else { continue };
                if agent.is_infected() {
                    continue;
                }
                if rng.chance(self.params.surface_probability) {
                    agent.infect(now, InfectionRoute::Surface);
                    debug!(agent = %id, time = now, "surface infection");
                    infected.push(id);
                }
            }
        }
        infected
    }
}
