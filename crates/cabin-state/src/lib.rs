//! `cabin-state` — everything the tick loop reads and writes.
//!
//! [`Cabin`] owns the layout, the passenger arena, the clock, the latest
//! concentration field, and the contact log.  The movement controller and
//! transmission model take `&mut Cabin` plus explicit `AgentId`s; there is
//! no other shared state.

pub mod cabin;
pub mod contact;
pub mod error;

#[cfg(test)]
mod tests;

pub use cabin::{Cabin, CabinConfig, InfectionCounts};
pub use contact::{ContactEvent, ContactLog};
pub use error::{StateError, StateResult};
