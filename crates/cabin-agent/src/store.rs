//! `AgentStore` — arena storage for all passengers.
//!
//! Passengers are created once and never added or removed, so `AgentId` is
//! simply the index into `agents`.  The movement controller and transmission
//! model address passengers by id through this store instead of holding
//! references, which keeps every mutation visible at the call site.

use cabin_core::{AgentId, Point2};

use crate::Agent;

#[derive(Debug)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// Wrap `agents`; `agents[i].id` must equal `AgentId(i)`.
    pub fn new(agents: Vec<Agent>) -> Self {
        debug_assert!(
            agents.iter().enumerate().all(|(i, a)| a.id.index() == i),
            "agent ids must match their arena index"
        );
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Look up a passenger.  `None` for unknown ids; callers treat that as
    /// "nothing to do".
    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn infected_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_infected()).count()
    }

    /// Current positions of every infected passenger, in id order.  These
    /// are the contamination sources pushed to the field solver.
    pub fn infected_positions(&self) -> Vec<Point2> {
        self.agents
            .iter()
            .filter(|a| a.is_infected())
            .map(|a| a.position)
            .collect()
    }

    /// Total seat collisions across all passengers.
    pub fn total_contacts(&self) -> u64 {
        self.agents.iter().map(|a| a.contact_count as u64).sum()
    }
}
