//! `cabin-core` — foundational types for the cabin transmission simulator.
//!
//! This crate is a dependency of every other `cabin-*` crate.  It has no
//! `cabin-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SeatId`                                   |
//! | [`geo`]         | `Point2`, `Bounds`                                    |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (the single run-wide random source)          |
//! | [`section`]     | `Section` enum (front / rear)                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod section;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, Point2};
pub use ids::{AgentId, SeatId};
pub use rng::SimRng;
pub use section::Section;
pub use time::{SimClock, SimConfig, Tick};
