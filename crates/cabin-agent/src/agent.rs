//! A single passenger.

use cabin_core::{AgentId, Point2, SeatId};
use cabin_geometry::Bathroom;

/// Where a passenger is in the bathroom round trip.
///
/// ```text
/// Idle ──start_trip──▶ ToBathroom ──head_back──▶ ToSeat ──settle──▶ Idle
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trip {
    /// Seated (or standing still); no destination.
    #[default]
    Idle,
    /// Walking to a bathroom.
    ToBathroom(Bathroom),
    /// Walking back to the assigned seat.
    ToSeat,
}

/// How a passenger became infected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionRoute {
    /// Infected when the population was generated.
    Initial,
    /// Exposure to the concentration field.
    Airborne,
    /// Shared touch-point with an infected passenger.
    Surface,
}

impl InfectionRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            InfectionRoute::Initial  => "initial",
            InfectionRoute::Airborne => "airborne",
            InfectionRoute::Surface  => "surface",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infection {
    /// Simulated time of the transition.
    pub time:  f64,
    pub route: InfectionRoute,
}

/// Per-passenger state.
///
/// Trip and infection state are private so their invariants hold: the
/// destination is set exactly while a trip is underway, and an infection,
/// once recorded, is never replaced or cleared.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:            AgentId,
    /// The assigned seat.  Fixed for the run.
    pub seat:          SeatId,
    pub position:      Point2,
    /// Number of seat collisions this passenger has had.
    pub contact_count: u32,
    trip:        Trip,
    destination: Option<Point2>,
    infection:   Option<Infection>,
}

impl Agent {
    /// A seated, idle, uninfected passenger at `seat_position`.
    pub fn seated(id: AgentId, seat: SeatId, seat_position: Point2) -> Self {
        Self {
            id,
            seat,
            position: seat_position,
            contact_count: 0,
            trip: Trip::Idle,
            destination: None,
            infection: None,
        }
    }

    // ── Movement state ────────────────────────────────────────────────────

    #[inline]
    pub fn trip(&self) -> Trip {
        self.trip
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.trip != Trip::Idle
    }

    #[inline]
    pub fn destination(&self) -> Option<Point2> {
        self.destination
    }

    /// Leave the seat for `bathroom`, located at `target`.
    pub fn start_trip(&mut self, bathroom: Bathroom, target: Point2) {
        self.trip = Trip::ToBathroom(bathroom);
        self.destination = Some(target);
    }

    /// Turn around at the bathroom and walk back to `seat_position`.
    pub fn head_back(&mut self, seat_position: Point2) {
        self.trip = Trip::ToSeat;
        self.destination = Some(seat_position);
    }

    /// Arrive back at the seat.
    pub fn settle(&mut self) {
        self.trip = Trip::Idle;
        self.destination = None;
    }

    // ── Infection state ───────────────────────────────────────────────────

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.infection.is_some()
    }

    #[inline]
    pub fn infection(&self) -> Option<Infection> {
        self.infection
    }

    #[inline]
    pub fn infection_time(&self) -> Option<f64> {
        self.infection.map(|i| i.time)
    }

    /// Record an infection at `time`.  Returns `false` (and changes nothing)
    /// if the passenger was already infected.
    pub fn infect(&mut self, time: f64, route: InfectionRoute) -> bool {
        if self.infection.is_some() {
            return false;
        }
        debug_assert!(time >= 0.0, "infection time must be non-negative, got {time}");
        self.infection = Some(Infection { time, route });
        true
    }
}
