//! Seat records and bathroom identifiers.

use cabin_core::{Point2, SeatId, Section};

/// One passenger seat.
///
/// Everything except the occupied flag is fixed when the layout is built;
/// the layout only hands out shared references, and occupancy changes go
/// through [`CabinLayout::occupy`](crate::CabinLayout::occupy).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub id:       SeatId,
    /// Row index across the whole cabin (rear rows continue after the front).
    pub row:      u32,
    /// Column 0–8, left to right across the 3-3-3 pattern.
    pub column:   u8,
    pub position: Point2,
    pub section:  Section,
    pub(crate) occupied: bool,
}

impl Seat {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// The two bathrooms passengers walk to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bathroom {
    /// On the boundary between the front and rear sections.
    Middle,
    /// Near the tail, at 95 % of the cabin length.
    Rear,
}

impl Bathroom {
    pub fn as_str(self) -> &'static str {
        match self {
            Bathroom::Middle => "middle",
            Bathroom::Rear   => "rear",
        }
    }
}

impl std::fmt::Display for Bathroom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
