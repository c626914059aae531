//! Per-passenger decision and motion.

use cabin_agent::Trip;
use cabin_core::{AgentId, Point2, Section, SimRng};
use cabin_geometry::{Bathroom, CabinLayout};
use cabin_state::{Cabin, ContactEvent};
use tracing::{debug, trace};

use crate::MovementParams;

/// Stateless apart from its parameters; all passenger state lives in the
/// [`Cabin`].
///
/// Unknown agent ids are ignored by every method.
#[derive(Clone, Debug, Default)]
pub struct MovementController {
    params: MovementParams,
}

impl MovementController {
    pub fn new(params: MovementParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MovementParams {
        &self.params
    }

    /// Decide then step every passenger, in id order.
    ///
    /// Returns the number of contact events recorded this tick.
    pub fn update_all(&self, cabin: &mut Cabin, rng: &mut SimRng) -> usize {
        let mut contacts = 0;
        for i in 0..cabin.agents.len() {
            let id = AgentId(i as u32);
            self.decide(id, cabin, rng);
            if self.step(id, cabin).is_some() {
                contacts += 1;
            }
        }
        contacts
    }

    // ── Decision ──────────────────────────────────────────────────────────

    /// Advance `id` through its bathroom round trip.
    ///
    /// Only an idle passenger consumes random draws.
    pub fn decide(&self, id: AgentId, cabin: &mut Cabin, rng: &mut SimRng) {
        let Some(seat) = cabin.seat_of(id) else { return };
        let (seat_position, section) = (seat.position, seat.section);
        let Some(agent) = cabin.agents.get(id) else { return };

        match agent.trip() {
            Trip::Idle => {
                if !rng.chance(self.params.trip_probability) {
                    return;
                }
                let bathroom = self.choose_bathroom(section, rng);
                let target = cabin.layout.bathroom(bathroom);
                debug!(agent = %id, %bathroom, "trip started");
                if let Some(agent) = cabin.agents.get_mut(id) {
                    agent.start_trip(bathroom, target);
                }
            }
            Trip::ToBathroom(_) => {
                if within(agent.position, agent.destination(), self.params.bathroom_arrival) {
                    if let Some(agent) = cabin.agents.get_mut(id) {
                        agent.head_back(seat_position);
                    }
                }
            }
            Trip::ToSeat => {
                if within(agent.position, agent.destination(), self.params.seat_arrival) {
                    if let Some(agent) = cabin.agents.get_mut(id) {
                        agent.settle();
                    }
                }
            }
        }
    }

    /// Front passengers draw once and take the middle bathroom below
    /// `middle_preference`; otherwise a second draw below `rear_preference`
    /// sends them to the rear.  Rear passengers make only the second draw
    /// and always go to the rear.
    fn choose_bathroom(&self, section: Section, rng: &mut SimRng) -> Bathroom {
        if section == Section::Front && rng.chance(self.params.middle_preference) {
            return Bathroom::Middle;
        }
        // The draw comes first so rear passengers consume it too.
        if rng.chance(self.params.rear_preference) || section == Section::Rear {
            Bathroom::Rear
        } else {
            Bathroom::Middle
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Move `id` one tick toward its next waypoint.
    ///
    /// Returns the contact event if the move collided with a seat.
    pub fn step(&self, id: AgentId, cabin: &mut Cabin) -> Option<ContactEvent> {
        let agent = cabin.agents.get(id)?;
        if !agent.is_moving() {
            return None;
        }
        let destination = agent.destination()?;
        let current = agent.position;

        let waypoint = self.plan_waypoint(current, destination, &cabin.layout);
        let direction = (waypoint - current).normalized()?;
        let mut next = current + direction * (self.params.speed * cabin.clock.tick_duration);

        let contact = cabin
            .layout
            .seat_within(next, self.params.collision_radius)
            .map(|seat| {
                trace!(agent = %id, %seat, position = %next, "seat collision");
                ContactEvent { time: cabin.now(), agent: id, position: next }
            });
        if contact.is_some() {
            next = self.resolve_collision(next, direction, &cabin.layout);
        }
        let next = cabin.layout.bounds().clamp(next);

        let agent = cabin.agents.get_mut(id)?;
        agent.position = next;
        if let Some(event) = contact {
            agent.contact_count += 1;
            cabin.contacts.record(event);
        }
        contact
    }

    /// Next intermediate target on the way from `current` to `destination`.
    ///
    /// Close destinations are approached directly.  Otherwise the passenger
    /// first walks laterally into the nearest aisle, then along it to the
    /// destination's `x`, then out of it.
    pub fn plan_waypoint(&self, current: Point2, destination: Point2, layout: &CabinLayout) -> Point2 {
        if current.distance(destination) < self.params.direct_distance {
            return destination;
        }
        let aisle = layout.nearest_aisle(current.y);
        if (current.y - aisle).abs() > self.params.aisle_tolerance {
            Point2::new(current.x, aisle)
        } else if (current.x - destination.x).abs() > self.params.longitudinal_tolerance {
            Point2::new(destination.x, aisle)
        } else {
            destination
        }
    }

    /// Where a passenger who collided at `position` while heading along
    /// `direction` (a unit vector) ends up.
    pub fn resolve_collision(&self, position: Point2, direction: Point2, layout: &CabinLayout) -> Point2 {
        if layout.in_aisle(position.y, self.params.aisle_tolerance) {
            position + direction.perpendicular() * self.params.nudge
        } else {
            Point2::new(position.x, layout.nearest_aisle(position.y))
        }
    }
}

#[inline]
fn within(position: Point2, target: Option<Point2>, radius: f64) -> bool {
    target.is_some_and(|t| position.distance(t) < radius)
}
