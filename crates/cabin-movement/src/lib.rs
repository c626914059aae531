//! `cabin-movement` — passenger decisions and motion inside the cabin.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`params`]     | `MovementParams`: probabilities, speed, tolerances          |
//! | [`controller`] | `MovementController`: per-tick decide and step              |
//! | [`error`]      | `MovementError`, `MovementResult<T>`                        |
//!
//! # Movement model
//!
//! Each tick, every passenger (in id order) first **decides** and then
//! **steps**:
//!
//! 1. An idle passenger starts a bathroom trip with a small probability.
//! 2. A passenger close enough to the bathroom turns around; one close
//!    enough to the seat settles.
//! 3. A moving passenger walks a fixed distance toward a waypoint: the
//!    destination itself when near, otherwise the nearest aisle first and
//!    then along it.
//! 4. Landing within the collision radius of any seat center counts as a
//!    contact.  The event is logged at the colliding position, then the
//!    passenger is pushed back into an aisle or nudged sideways.
//!
//! Positions are clamped to the cabin bounds after every step.

pub mod controller;
pub mod error;
pub mod params;

#[cfg(test)]
mod tests;

pub use controller::MovementController;
pub use error::{MovementError, MovementResult};
pub use params::MovementParams;
