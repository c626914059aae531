//! Unit tests for cabin-geometry.

use cabin_core::{Point2, SeatId, Section};

use crate::{Bathroom, CabinDimensions, CabinLayout, GeometryError, SEATS_PER_ROW};

fn default_layout() -> CabinLayout {
    CabinLayout::build(CabinDimensions::default()).unwrap()
}

// ── Seat generation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod generation {
    use super::*;

    #[test]
    fn default_cabin_has_243_seats() {
        let layout = default_layout();
        assert_eq!(layout.seat_count(), 27 * SEATS_PER_ROW);
        assert_eq!(layout.occupied_count(), 0);
    }

    #[test]
    fn seat_ids_match_positions_in_order() {
        let layout = default_layout();
        for (i, seat) in layout.seats().iter().enumerate() {
            assert_eq!(seat.id, SeatId(i as u32));
        }
    }

    #[test]
    fn first_row_lateral_positions() {
        let layout = default_layout();
        let ys: Vec<f64> = layout.seats()[..9].iter().map(|s| s.position.y).collect();
        let expected = [0.8, 1.6, 2.4, 3.0, 3.8, 4.6, 5.2, 6.0, 6.8];
        for (got, want) in ys.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn longitudinal_spacing_and_middle_gap() {
        let layout = default_layout();
        let spacing = 40.0 / 29.0;
        let seats = layout.seats();

        // Front row 0 sits one spacing from the nose.
        assert!((seats[0].position.x - spacing).abs() < 1e-9);
        // Last front row (12) and first rear row (13) are 2.5 spacings apart.
        let last_front  = seats[12 * 9].position.x;
        let first_rear  = seats[13 * 9].position.x;
        assert!((first_rear - last_front - 2.5 * spacing).abs() < 1e-9);
        assert!((first_rear - 15.5 * spacing).abs() < 1e-9);
    }

    #[test]
    fn sections_split_at_front_row_count() {
        let layout = default_layout();
        let front = layout.seats().iter().filter(|s| s.section == Section::Front).count();
        let rear  = layout.seats().iter().filter(|s| s.section == Section::Rear).count();
        assert_eq!(front, 13 * 9);
        assert_eq!(rear, 14 * 9);
        assert_eq!(layout.seats()[13 * 9].row, 13);
    }

    #[test]
    fn bathroom_positions() {
        let layout = default_layout();
        let middle = layout.bathroom(Bathroom::Middle);
        let rear = layout.bathroom(Bathroom::Rear);
        assert!((middle.x - 13.0 / 27.0 * 40.0).abs() < 1e-9);
        assert_eq!(middle.y, 3.0);
        assert!((rear.x - 38.0).abs() < 1e-9);
        assert_eq!(rear.y, 3.0);
    }

    #[test]
    fn bounds_cover_cabin_and_window_seats() {
        let layout = default_layout();
        let b = layout.bounds();
        assert_eq!(b.min, Point2::ORIGIN);
        assert_eq!(b.max.x, 40.0);
        assert!((b.max.y - 6.8).abs() < 1e-9);
        assert!(layout.seats().iter().all(|s| b.contains(s.position)));
        assert!(b.contains(layout.bathroom(Bathroom::Rear)));
    }

    #[test]
    fn invalid_dimensions_rejected() {
        let dims = CabinDimensions { length: 0.0, ..CabinDimensions::default() };
        assert!(matches!(
            CabinLayout::build(dims),
            Err(GeometryError::InvalidDimension { name: "length", .. })
        ));

        let dims = CabinDimensions { front_rows: 0, rear_rows: 0, ..CabinDimensions::default() };
        assert!(matches!(CabinLayout::build(dims), Err(GeometryError::NoRows)));
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn occupy_once() {
        let mut layout = default_layout();
        layout.occupy(SeatId(5)).unwrap();
        assert!(layout.seat(SeatId(5)).unwrap().is_occupied());
        assert!(matches!(layout.occupy(SeatId(5)), Err(GeometryError::SeatTaken(_))));
        assert_eq!(layout.occupied_count(), 1);
    }

    #[test]
    fn occupy_unknown_seat() {
        let mut layout = default_layout();
        assert!(matches!(
            layout.occupy(SeatId(10_000)),
            Err(GeometryError::SeatNotFound(_))
        ));
    }
}

// ── Spatial queries ───────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn nearest_aisle_picks_closer_centerline() {
        let layout = default_layout();
        assert_eq!(layout.nearest_aisle(0.0), 2.4);
        assert_eq!(layout.nearest_aisle(6.8), 4.6);
        assert_eq!(layout.nearest_aisle(4.0), 4.6);
    }

    #[test]
    fn in_aisle_is_strict() {
        let layout = default_layout();
        assert!(layout.in_aisle(2.5, 0.3));
        assert!(layout.in_aisle(4.45, 0.3));
        assert!(!layout.in_aisle(3.0, 0.3));
    }

    #[test]
    fn seat_within_radius() {
        let layout = default_layout();
        let seat = layout.seats()[4].position;
        assert_eq!(layout.seat_within(seat, 0.4), Some(SeatId(4)));
        assert!(layout.seat_within(Point2::new(seat.x + 0.39, seat.y), 0.4).is_some());
        assert!(layout.seat_within(Point2::new(seat.x + 0.41, seat.y), 0.4).is_none());
        // The middle bathroom is in the seat-free gap.
        assert!(layout.seat_within(layout.bathroom(Bathroom::Middle), 0.4).is_none());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn seat_count_and_unique_row_column(
            front in 1u32..30,
            rear in 0u32..30,
            length in 10.0f64..80.0,
        ) {
            let dims = CabinDimensions { length, width: 6.0, front_rows: front, rear_rows: rear };
            let layout = CabinLayout::build(dims).unwrap();
            prop_assert_eq!(layout.seat_count(), (front + rear) as usize * 9);

            let keys: HashSet<(u32, u8)> =
                layout.seats().iter().map(|s| (s.row, s.column)).collect();
            prop_assert_eq!(keys.len(), layout.seat_count());
            prop_assert!(layout.seats().iter().all(|s| s.column < 9));
        }

        #[test]
        fn aisles_lie_between_triplet_centers(front in 1u32..10, rear in 1u32..10) {
            let dims = CabinDimensions { front_rows: front, rear_rows: rear, ..CabinDimensions::default() };
            let layout = CabinLayout::build(dims).unwrap();
            let row: Vec<f64> = layout.seats()[..9].iter().map(|s| s.position.y).collect();
            let centers = [row[1], row[4], row[7]];
            let [a0, a1] = layout.aisles();
            prop_assert!(centers[0] < a0 && a0 < centers[1]);
            prop_assert!(centers[1] < a1 && a1 < centers[2]);
        }

        #[test]
        fn rows_increase_along_cabin(front in 1u32..20, rear in 1u32..20) {
            let dims = CabinDimensions { front_rows: front, rear_rows: rear, ..CabinDimensions::default() };
            let layout = CabinLayout::build(dims).unwrap();
            let xs: Vec<f64> = layout.seats().chunks(9).map(|r| r[0].position.x).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(xs.iter().all(|&x| x > 0.0 && x < layout.dimensions().length));
        }
    }
}
