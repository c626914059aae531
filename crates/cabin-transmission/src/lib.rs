//! `cabin-transmission` — how passengers become infected.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`params`]  | `TransmissionParams`, `MAX_BUCKET_DECIMALS`                  |
//! | [`model`]   | `TransmissionModel`, `TransmissionOutcome`, `BucketKey`      |
//! | [`error`]   | `TransmissionError`, `TransmissionResult<T>`                 |
//!
//! # Channels
//!
//! Run once per tick, airborne first:
//!
//! - **Airborne**: every uninfected passenger makes one draw against
//!   `1 − exp(−rate · c)`, where `c` is the field value at their position.
//!   Skipped entirely until a field exists.
//! - **Surface**: recent contact events are grouped by rounded position.
//!   A group that holds an infected passenger exposes the uninfected
//!   passengers listed in it, one draw per listed entry.
//!
//! Neither channel fails; missing data means nothing happens.

pub mod error;
pub mod model;
pub mod params;


pub use error::{TransmissionError, TransmissionResult};
pub use model::{BucketKey, TransmissionModel, TransmissionOutcome};
pub use params::{MAX_BUCKET_DECIMALS, TransmissionParams};
