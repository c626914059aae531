//! Cabin layout: seat generation and spatial queries.
//!
//! # Coordinate frame
//!
//! `x` runs from the nose (0) to the tail (`length`); `y` runs across the
//! cabin.  Each row holds nine seats in three triplets.  The triplets start
//! at `y = 0.8, 3.0, 5.2` with 0.8 between neighbours, which leaves two
//! aisles whose centerlines sit at [`AISLE_Y`].
//!
//! ```text
//!   y  0.8 1.6 2.4 | 2.4 | 3.0 3.8 4.6 | 4.6 | 5.2 6.0 6.8
//!      [s] [s] [s] aisle [s] [s] [s] aisle [s] [s] [s]
//! ```
//!
//! Rows are spaced `length / (total_rows + 2)` apart.  An extra 1.5 spacings
//! separate the front section from the rear one; the middle bathroom sits in
//! that gap.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over seat centers answers the per-step "is any
//! seat within r of this point" query used by collision detection.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use cabin_core::{Bounds, Point2, SeatId, Section};

use crate::{Bathroom, GeometryError, GeometryResult, Seat};

/// Seats per row in the 3-3-3 pattern.
pub const SEATS_PER_ROW: usize = 9;

/// Lateral centerlines of the two aisles.
pub const AISLE_Y: [f64; 2] = [2.4, 4.6];

/// First-seat `y` of each triplet.
const TRIPLET_START_Y: [f64; 3] = [0.8, 3.0, 5.2];

/// Lateral distance between neighbouring seats within a triplet.
const SEAT_PITCH_Y: f64 = 0.8;

/// Row spacings inserted before the rear section for the middle bathroom.
const MIDDLE_GAP_SPACINGS: f64 = 1.5;

/// Rear bathroom position as a fraction of cabin length.
const REAR_BATHROOM_FRACTION: f64 = 0.95;

// ── CabinDimensions ───────────────────────────────────────────────────────────

/// Size and row counts of the two-section cabin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CabinDimensions {
    /// Nose-to-tail length.
    pub length:     f64,
    /// Side-to-side width.  Bathrooms sit at `width / 2`.
    pub width:      f64,
    pub front_rows: u32,
    pub rear_rows:  u32,
}

impl Default for CabinDimensions {
    fn default() -> Self {
        Self {
            length:     40.0,
            width:      6.0,
            front_rows: 13,
            rear_rows:  14,
        }
    }
}

impl CabinDimensions {
    #[inline]
    pub fn total_rows(&self) -> u32 {
        self.front_rows + self.rear_rows
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.total_rows() as usize * SEATS_PER_ROW
    }

    /// Longitudinal distance between consecutive rows.
    #[inline]
    pub fn row_spacing(&self) -> f64 {
        self.length / (self.total_rows() as f64 + 2.0)
    }

    fn validate(&self) -> GeometryResult<()> {
        for (name, value) in [("length", self.length), ("width", self.width)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::InvalidDimension { name, value });
            }
        }
        if self.total_rows() == 0 {
            return Err(GeometryError::NoRows);
        }
        Ok(())
    }
}

// ── R-tree seat entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct SeatEntry {
    point: [f64; 2],
    id:    SeatId,
}

impl RTreeObject for SeatEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SeatEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── CabinLayout ───────────────────────────────────────────────────────────────

/// The generated cabin: seats in row-major order plus the derived aisle and
/// bathroom reference points.
///
/// Coordinates never change after [`build`](Self::build); only seat
/// occupancy does.
pub struct CabinLayout {
    dimensions: CabinDimensions,
    seats:      Vec<Seat>,
    bathrooms:  [Point2; 2],
    bounds:     Bounds,
    seat_idx:   RTree<SeatEntry>,
}

impl CabinLayout {
    /// Generate the full seat set for `dimensions`.
    pub fn build(dimensions: CabinDimensions) -> GeometryResult<Self> {
        dimensions.validate()?;

        let spacing = dimensions.row_spacing();
        let mut seats = Vec::with_capacity(dimensions.seat_count());

        for row in 0..dimensions.front_rows {
            let x = (row as f64 + 1.0) * spacing;
            push_row(&mut seats, row, x, Section::Front);
        }
        let rear_start = (dimensions.front_rows as f64 + MIDDLE_GAP_SPACINGS) * spacing;
        for row in 0..dimensions.rear_rows {
            let x = rear_start + (row as f64 + 1.0) * spacing;
            push_row(&mut seats, dimensions.front_rows + row, x, Section::Rear);
        }

        let front_share = dimensions.front_rows as f64 / dimensions.total_rows() as f64;
        let mid_y = dimensions.width / 2.0;
        let bathrooms = [
            Point2::new(front_share * dimensions.length, mid_y),
            Point2::new(REAR_BATHROOM_FRACTION * dimensions.length, mid_y),
        ];

        // The outer window column extends past the nominal width; bounds
        // cover both so seated passengers are always in range.
        let mut bounds = Bounds::new(
            Point2::ORIGIN,
            Point2::new(dimensions.length, dimensions.width),
        );
        for seat in &seats {
            bounds.include(seat.position);
        }

        let entries = seats
            .iter()
            .map(|s: &Seat| SeatEntry { point: [s.position.x, s.position.y], id: s.id })
            .collect();

        Ok(Self {
            dimensions,
            seats,
            bathrooms,
            bounds,
            seat_idx: RTree::bulk_load(entries),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn dimensions(&self) -> &CabinDimensions {
        &self.dimensions
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(id.index())
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.occupied).count()
    }

    /// Lateral centerlines of the two aisles.
    #[inline]
    pub fn aisles(&self) -> [f64; 2] {
        AISLE_Y
    }

    #[inline]
    pub fn bathroom(&self, which: Bathroom) -> Point2 {
        match which {
            Bathroom::Middle => self.bathrooms[0],
            Bathroom::Rear   => self.bathrooms[1],
        }
    }

    /// Region every passenger position must stay inside.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Mark `id` as taken.  A seat can be assigned to at most one passenger.
    pub fn occupy(&mut self, id: SeatId) -> GeometryResult<()> {
        let seat = self
            .seats
            .get_mut(id.index())
            .ok_or(GeometryError::SeatNotFound(id))?;
        if seat.occupied {
            return Err(GeometryError::SeatTaken(id));
        }
        seat.occupied = true;
        Ok(())
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The aisle centerline closest to `y`.  The first aisle wins ties.
    pub fn nearest_aisle(&self, y: f64) -> f64 {
        let [first, second] = AISLE_Y;
        if (y - second).abs() < (y - first).abs() { second } else { first }
    }

    /// `true` if `y` is strictly within `tolerance` of either centerline.
    pub fn in_aisle(&self, y: f64, tolerance: f64) -> bool {
        AISLE_Y.iter().any(|a| (y - a).abs() < tolerance)
    }

    /// A seat whose center lies strictly within `radius` of `p`, if any.
    pub fn seat_within(&self, p: Point2, radius: f64) -> Option<SeatId> {
        let query = [p.x, p.y];
        self.seat_idx
            .nearest_neighbor(&query)
            .filter(|e| e.distance_2(&query) < radius * radius)
            .map(|e| e.id)
    }
}

fn push_row(seats: &mut Vec<Seat>, row: u32, x: f64, section: Section) {
    for (triplet, start_y) in TRIPLET_START_Y.iter().enumerate() {
        for k in 0..3 {
            let column = (triplet * 3 + k) as u8;
            seats.push(Seat {
                id:       SeatId(seats.len() as u32),
                row,
                column,
                position: Point2::new(x, start_y + k as f64 * SEAT_PITCH_Y),
                section,
                occupied: false,
            });
        }
    }
}
