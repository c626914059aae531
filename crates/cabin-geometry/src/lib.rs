//! `cabin-geometry` — seat layout and fixed spatial reference points.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`layout`]  | `CabinLayout` (seats + R-tree), `CabinDimensions`           |
//! | [`seat`]    | `Seat`, `Bathroom`                                          |
//! | [`error`]   | `GeometryError`, `GeometryResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod layout;
pub mod seat;

#[cfg(test)]
mod tests;

pub use error::{GeometryError, GeometryResult};
pub use layout::{AISLE_Y, CabinDimensions, CabinLayout, SEATS_PER_ROW};
pub use seat::{Bathroom, Seat};
