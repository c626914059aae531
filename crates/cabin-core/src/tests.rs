//! Unit tests for cabin-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, SeatId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(SeatId(100) > SeatId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(SeatId(3).to_string(), "SeatId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Point2};

    #[test]
    fn distance_is_euclidean() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(Point2::ORIGIN.normalized().is_none());
        let u = Point2::new(0.0, 2.0).normalized().unwrap();
        assert_eq!(u, Point2::new(0.0, 1.0));
    }

    #[test]
    fn perpendicular_turns_left() {
        assert_eq!(Point2::new(1.0, 0.0).perpendicular(), Point2::new(-0.0, 1.0));
        assert_eq!(Point2::new(0.0, 1.0).perpendicular(), Point2::new(-1.0, 0.0));
    }

    #[test]
    fn bounds_clamp_and_include() {
        let mut b = Bounds::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert!(b.contains(Point2::new(10.0, 5.0)));
        assert_eq!(b.clamp(Point2::new(12.0, -1.0)), Point2::new(10.0, 0.0));

        b.include(Point2::new(3.0, 7.0));
        assert_eq!(b.max.y, 7.0);
        assert_eq!(b.height(), 7.0);
        assert_eq!(b.width(), 10.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
    }

    #[test]
    fn interval_fires_on_zero_and_multiples() {
        assert!(Tick(0).is_on_interval(60));
        assert!(Tick(120).is_on_interval(60));
        assert!(!Tick(59).is_on_interval(60));
        assert!(!Tick(0).is_on_interval(0));
    }

    #[test]
    fn clock_now_scales_by_duration() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.now(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new(1.0);
        for _ in 0..3_725 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T3725 (01:02:05)");
    }

    #[test]
    fn default_config_is_one_hour_at_one_second() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.end_tick(), Tick(3_600));
        assert_eq!(cfg.field_refresh_interval_ticks, 60);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let cfg = SimConfig { tick_duration: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn chance_consumes_one_draw() {
        let mut a = SimRng::new(3);
        let mut b = SimRng::new(3);
        a.chance(0.0);
        b.uniform();
        assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
    }

    #[test]
    fn sample_indices_are_distinct() {
        let mut rng = SimRng::new(11);
        let mut picked = rng.sample_indices(50, 45);
        assert_eq!(picked.len(), 45);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 45);
        assert!(picked.iter().all(|&i| i < 50));
    }
}
