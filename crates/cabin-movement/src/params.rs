//! Tunable movement constants.

use crate::{MovementError, MovementResult};

/// Probabilities, distances, and tolerances used by [`MovementController`].
///
/// Distances are in cabin units; `speed` is per unit of simulated time.
///
/// [`MovementController`]: crate::MovementController
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementParams {
    /// Per-tick probability that an idle passenger leaves for a bathroom.
    pub trip_probability: f64,

    /// Probability that a front passenger picks the middle bathroom outright.
    pub middle_preference: f64,

    /// Second draw: probability of the rear bathroom for a passenger who did
    /// not take the first branch.
    pub rear_preference: f64,

    pub speed: f64,

    /// Turn around once closer than this to the bathroom.
    pub bathroom_arrival: f64,

    /// Settle once closer than this to the seat.
    pub seat_arrival: f64,

    /// Head straight for the destination once closer than this.
    pub direct_distance: f64,

    /// Lateral distance from an aisle centerline that still counts as
    /// being in the aisle.
    pub aisle_tolerance: f64,

    /// Longitudinal distance from the destination at which a passenger
    /// leaves the aisle.
    pub longitudinal_tolerance: f64,

    /// A seat center strictly closer than this is a collision.
    pub collision_radius: f64,

    /// Sideways step applied when a collision happens inside an aisle.
    pub nudge: f64,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            trip_probability:       0.0005,
            middle_preference:      0.7,
            rear_preference:        0.3,
            speed:                  0.5,
            bathroom_arrival:       0.5,
            seat_arrival:           0.3,
            direct_distance:        1.0,
            aisle_tolerance:        0.3,
            longitudinal_tolerance: 0.5,
            collision_radius:       0.4,
            nudge:                  0.1,
        }
    }
}

impl MovementParams {
    pub fn validate(&self) -> MovementResult<()> {
        for (name, value) in [
            ("trip_probability", self.trip_probability),
            ("middle_preference", self.middle_preference),
            ("rear_preference", self.rear_preference),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MovementError::InvalidProbability { name, value });
            }
        }
        for (name, value) in [
            ("speed", self.speed),
            ("bathroom_arrival", self.bathroom_arrival),
            ("seat_arrival", self.seat_arrival),
            ("direct_distance", self.direct_distance),
            ("aisle_tolerance", self.aisle_tolerance),
            ("longitudinal_tolerance", self.longitudinal_tolerance),
            ("collision_radius", self.collision_radius),
            ("nudge", self.nudge),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MovementError::InvalidDistance { name, value });
            }
        }
        Ok(())
    }
}
