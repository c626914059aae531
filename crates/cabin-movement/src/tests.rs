//! Unit tests for cabin-movement.

use cabin_agent::Trip;
use cabin_core::{AgentId, Point2, SeatId, SimClock, SimRng};
use cabin_geometry::{Bathroom, CabinDimensions, CabinLayout};
use cabin_state::{Cabin, CabinConfig};

use crate::{MovementController, MovementError, MovementParams};

// Front row 12, aisle-side seat of the first triplet: (17.93, 2.4).
const AISLE_SEAT_NEAR_MIDDLE: SeatId = SeatId(110);

fn layout() -> CabinLayout {
    CabinLayout::build(CabinDimensions::default()).unwrap()
}

fn cabin_with(seats: &[SeatId]) -> Cabin {
    Cabin::with_seated(CabinDimensions::default(), seats, SimClock::default()).unwrap()
}

/// Run one tick of movement and advance the clock.
fn tick(controller: &MovementController, cabin: &mut Cabin, rng: &mut SimRng) {
    controller.update_all(cabin, rng);
    cabin.clock.advance();
}

fn assert_close(a: Point2, b: Point2) {
    assert!(a.distance(b) < 1e-9, "{a} != {b}");
}

// ── Params ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(MovementParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let p = MovementParams { middle_preference: 1.5, ..MovementParams::default() };
        assert!(matches!(
            p.validate(),
            Err(MovementError::InvalidProbability { name: "middle_preference", .. })
        ));

        let p = MovementParams { speed: 0.0, ..MovementParams::default() };
        assert!(matches!(p.validate(), Err(MovementError::InvalidDistance { name: "speed", .. })));
    }
}

// ── Waypoints ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod waypoint {
    use super::*;

    #[test]
    fn close_destination_is_direct() {
        let c = MovementController::default();
        let dest = Point2::new(10.5, 2.6);
        assert_eq!(c.plan_waypoint(Point2::new(10.0, 2.4), dest, &layout()), dest);
    }

    #[test]
    fn off_aisle_moves_laterally_first() {
        let c = MovementController::default();
        let wp = c.plan_waypoint(Point2::new(10.0, 0.8), Point2::new(30.0, 3.0), &layout());
        assert_eq!(wp, Point2::new(10.0, 2.4));

        let wp = c.plan_waypoint(Point2::new(10.0, 5.2), Point2::new(30.0, 3.0), &layout());
        assert_eq!(wp, Point2::new(10.0, 4.6));
    }

    #[test]
    fn in_aisle_walks_along_it() {
        let c = MovementController::default();
        let wp = c.plan_waypoint(Point2::new(10.0, 2.5), Point2::new(30.0, 3.0), &layout());
        assert_eq!(wp, Point2::new(30.0, 2.4));
    }

    #[test]
    fn aligned_in_aisle_leaves_for_destination() {
        let c = MovementController::default();
        let dest = Point2::new(30.0, 3.9);
        assert_eq!(c.plan_waypoint(Point2::new(30.2, 2.4), dest, &layout()), dest);
    }
}

// ── Collisions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod collision {
    use super::*;

    #[test]
    fn outside_aisle_snaps_to_nearest() {
        let c = MovementController::default();
        let p = c.resolve_collision(Point2::new(10.0, 1.9), Point2::new(0.0, 1.0), &layout());
        assert_eq!(p, Point2::new(10.0, 2.4));
    }

    #[test]
    fn inside_aisle_nudges_left_of_travel() {
        let c = MovementController::default();
        let p = c.resolve_collision(Point2::new(10.0, 2.4), Point2::new(1.0, 0.0), &layout());
        assert_close(p, Point2::new(10.0, 2.5));

        let p = c.resolve_collision(Point2::new(10.0, 4.6), Point2::new(0.0, 1.0), &layout());
        assert_close(p, Point2::new(9.9, 4.6));
    }

    #[test]
    fn step_into_neighbour_seat_records_contact() {
        let c = MovementController::default();
        let mut cabin = cabin_with(&[SeatId(0)]);
        let target = cabin.layout.bathroom(Bathroom::Middle);
        cabin.agent_by_id_mut(AgentId(0)).unwrap().start_trip(Bathroom::Middle, target);

        // From the window seat toward the aisle: 0.5 up lands 0.3 from the
        // middle seat of the triplet.
        let seat_x = cabin.layout.seats()[0].position.x;
        let event = c.step(AgentId(0), &mut cabin).expect("collision");
        assert_eq!(event.agent, AgentId(0));
        assert_eq!(event.time, 0.0);
        assert_close(event.position, Point2::new(seat_x, 1.3));

        let agent = cabin.agent_by_id(AgentId(0)).unwrap();
        assert_eq!(agent.contact_count, 1);
        assert_close(agent.position, Point2::new(seat_x, 2.4));
        assert_eq!(cabin.contacts.events(), &[event]);
    }

    #[test]
    fn idle_or_unknown_agents_do_not_move() {
        let c = MovementController::default();
        let mut cabin = cabin_with(&[SeatId(0)]);
        let before = cabin.agent_by_id(AgentId(0)).unwrap().position;
        assert!(c.step(AgentId(0), &mut cabin).is_none());
        assert!(c.step(AgentId(9), &mut cabin).is_none());
        assert_eq!(cabin.agent_by_id(AgentId(0)).unwrap().position, before);
        assert!(cabin.contacts.is_empty());
    }
}

// ── Decisions ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod decide {
    use super::*;

    /// Start a trip for a single passenger and report where they went and
    /// how many draws it took.
    fn first_trip(seat: SeatId, middle: f64, rear: f64) -> (Bathroom, usize) {
        let params = MovementParams {
            trip_probability: 1.0,
            middle_preference: middle,
            rear_preference: rear,
            ..MovementParams::default()
        };
        let c = MovementController::new(params);
        let mut cabin = cabin_with(&[seat]);
        let mut rng = SimRng::new(11);
        c.decide(AgentId(0), &mut cabin, &mut rng);

        let bathroom = match cabin.agent_by_id(AgentId(0)).unwrap().trip() {
            Trip::ToBathroom(b) => b,
            other => panic!("expected a bathroom trip, got {other:?}"),
        };
        let draws = draws_consumed(11, rng.uniform()).expect("draw count");
        (bathroom, draws)
    }

    /// How many draws a fresh `SimRng::new(seed)` had made before producing
    /// `next`.
    fn draws_consumed(seed: u64, next: f64) -> Option<usize> {
        (0..5).find(|&n| {
            let mut reference = SimRng::new(seed);
            for _ in 0..n {
                reference.uniform();
            }
            reference.uniform() == next
        })
    }

    #[test]
    fn front_passenger_bathroom_choice() {
        assert_eq!(first_trip(SeatId(0), 1.0, 0.0), (Bathroom::Middle, 2));
        assert_eq!(first_trip(SeatId(0), 0.0, 1.0), (Bathroom::Rear, 3));
        assert_eq!(first_trip(SeatId(0), 0.0, 0.0), (Bathroom::Middle, 3));
    }

    #[test]
    fn rear_passenger_always_goes_rear_after_one_choice_draw() {
        let rear_seat = SeatId(200);
        assert_eq!(first_trip(rear_seat, 1.0, 0.0), (Bathroom::Rear, 2));
        assert_eq!(first_trip(rear_seat, 0.0, 1.0), (Bathroom::Rear, 2));
    }

    #[test]
    fn no_trip_consumes_one_draw() {
        let c = MovementController::new(MovementParams { trip_probability: 0.0, ..MovementParams::default() });
        let mut cabin = cabin_with(&[SeatId(0)]);
        let mut rng = SimRng::new(3);
        c.decide(AgentId(0), &mut cabin, &mut rng);
        assert_eq!(cabin.agent_by_id(AgentId(0)).unwrap().trip(), Trip::Idle);

        assert_eq!(draws_consumed(3, rng.uniform()), Some(1));
    }

    #[test]
    fn round_trip_returns_to_idle() {
        let c = MovementController::new(MovementParams { trip_probability: 0.0, ..MovementParams::default() });
        let mut cabin = cabin_with(&[AISLE_SEAT_NEAR_MIDDLE]);
        let target = cabin.layout.bathroom(Bathroom::Middle);
        cabin.agent_by_id_mut(AgentId(0)).unwrap().start_trip(Bathroom::Middle, target);
        let seat = cabin.layout.seats()[AISLE_SEAT_NEAR_MIDDLE.index()].position;
        let mut rng = SimRng::new(0);

        let mut saw_return = false;
        for _ in 0..100 {
            tick(&c, &mut cabin, &mut rng);
            let agent = cabin.agent_by_id(AgentId(0)).unwrap();
            match agent.trip() {
                Trip::ToSeat => saw_return = true,
                Trip::Idle => break,
                Trip::ToBathroom(_) => {}
            }
        }

        let agent = cabin.agent_by_id(AgentId(0)).unwrap();
        assert!(saw_return);
        assert_eq!(agent.trip(), Trip::Idle);
        assert!(agent.destination().is_none());
        assert!(agent.position.distance(seat) < 0.3);
    }
}

// ── Whole-cabin runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod update_all {
    use super::*;

    fn busy() -> MovementController {
        MovementController::new(MovementParams { trip_probability: 0.02, ..MovementParams::default() })
    }

    fn boarded(seed: u64) -> (Cabin, SimRng) {
        let mut rng = SimRng::new(seed);
        let cabin = Cabin::build(&CabinConfig::default(), SimClock::default(), &mut rng).unwrap();
        (cabin, rng)
    }

    #[test]
    fn positions_stay_in_bounds_and_contacts_touch_seats() {
        let c = busy();
        let (mut cabin, mut rng) = boarded(5);
        for _ in 0..600 {
            tick(&c, &mut cabin, &mut rng);
        }
        let bounds = cabin.layout.bounds();
        assert!(cabin.agents.iter().all(|a| bounds.contains(a.position)));
        assert!(!cabin.contacts.is_empty());
        for event in cabin.contacts.events() {
            assert!(cabin.layout.seat_within(event.position, 0.4).is_some());
        }
        assert_eq!(cabin.agents.total_contacts(), cabin.contacts.len() as u64);
    }

    #[test]
    fn clamps_to_cabin_end() {
        let c = MovementController::default();
        let mut cabin = cabin_with(&[SeatId(0)]);
        let agent = cabin.agent_by_id_mut(AgentId(0)).unwrap();
        agent.position = Point2::new(39.8, 2.4);
        agent.start_trip(Bathroom::Rear, Point2::new(50.0, 2.4));

        assert!(c.step(AgentId(0), &mut cabin).is_none());
        assert_eq!(cabin.agent_by_id(AgentId(0)).unwrap().position, Point2::new(40.0, 2.4));
    }

    #[test]
    fn same_seed_same_trajectories() {
        let c = busy();
        let (mut a, mut rng_a) = boarded(21);
        let (mut b, mut rng_b) = boarded(21);
        for _ in 0..300 {
            tick(&c, &mut a, &mut rng_a);
            tick(&c, &mut b, &mut rng_b);
        }
        assert_eq!(a.agents.as_slice(), b.agents.as_slice());
        assert_eq!(a.contacts.events(), b.contacts.events());
    }
}
