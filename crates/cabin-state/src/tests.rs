//! Unit tests for cabin-state.

use cabin_agent::{InfectionRoute, PopulationConfig};
use cabin_core::{AgentId, Point2, SeatId, Section, SimClock, SimRng};
use cabin_field::{ConcentrationField, linspace};
use cabin_geometry::CabinDimensions;

use crate::{Cabin, CabinConfig, ContactEvent, ContactLog, StateError};

fn event(time: f64, agent: u32) -> ContactEvent {
    ContactEvent { time, agent: AgentId(agent), position: Point2::new(10.0, 2.4) }
}

// ── ContactLog ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contact_log {
    use super::*;

    #[test]
    fn recent_uses_strict_window() {
        let mut log = ContactLog::new();
        for t in [0.0, 10.0, 40.0, 70.0] {
            log.record(event(t, 0));
        }
        let times: Vec<f64> = log.recent(70.0, 60.0).map(|e| e.time).collect();
        // 70 - 10 = 60 is not < 60.
        assert_eq!(times, vec![40.0, 70.0]);

        let times: Vec<f64> = log.recent(69.5, 60.0).map(|e| e.time).collect();
        assert_eq!(times, vec![10.0, 40.0, 70.0]);
    }

    #[test]
    fn recent_on_empty_log() {
        let log = ContactLog::new();
        assert_eq!(log.recent(100.0, 60.0).count(), 0);
        assert!(log.is_empty());
    }
}

// ── Cabin ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cabin {
    use super::*;

    #[test]
    fn build_boards_configured_population() {
        let mut rng = SimRng::new(42);
        let cabin = Cabin::build(&CabinConfig::default(), SimClock::default(), &mut rng).unwrap();
        assert_eq!(cabin.agents.len(), 218);
        assert_eq!(cabin.layout.occupied_count(), 218);
        assert!(cabin.field.is_none());
        assert!(cabin.contacts.is_empty());
        assert_eq!(cabin.now(), 0.0);
    }

    #[test]
    fn overfull_population_fails_before_running() {
        let config = CabinConfig {
            population: PopulationConfig { agent_count: Some(1_000), ..PopulationConfig::default() },
            ..CabinConfig::default()
        };
        let result = Cabin::build(&config, SimClock::default(), &mut SimRng::new(0));
        assert!(matches!(result, Err(StateError::Population(_))));
    }

    #[test]
    fn with_seated_places_in_order() {
        let cabin = Cabin::with_seated(
            CabinDimensions::default(),
            &[SeatId(10), SeatId(200)],
            SimClock::default(),
        )
        .unwrap();
        assert_eq!(cabin.agents.len(), 2);
        assert_eq!(cabin.agent_by_id(AgentId(1)).unwrap().seat, SeatId(200));
        assert_eq!(cabin.section_of(AgentId(0)), Some(Section::Front));
        assert_eq!(cabin.section_of(AgentId(1)), Some(Section::Rear));
        assert!(cabin.agent_by_id(AgentId(2)).is_none());
        assert!(cabin.section_of(AgentId(2)).is_none());
    }

    #[test]
    fn with_seated_rejects_double_booking() {
        let result = Cabin::with_seated(
            CabinDimensions::default(),
            &[SeatId(3), SeatId(3)],
            SimClock::default(),
        );
        assert!(matches!(result, Err(StateError::Geometry(_))));
    }

    #[test]
    fn concentration_is_zero_without_field() {
        let cabin = Cabin::with_seated(CabinDimensions::default(), &[], SimClock::default()).unwrap();
        assert_eq!(cabin.concentration_at(Point2::new(5.0, 2.4)), 0.0);
    }

    #[test]
    fn concentration_reads_installed_field() {
        let mut cabin = Cabin::with_seated(CabinDimensions::default(), &[], SimClock::default()).unwrap();
        let field = ConcentrationField::from_fn(
            0.0,
            linspace(0.0, 40.0, 41),
            linspace(0.0, 6.0, 7),
            |x, y| x + y / 10.0,
        )
        .unwrap();
        cabin.install_field(field);
        let p = Point2::new(12.2, 2.6);
        assert!((cabin.concentration_at(p) - 12.3).abs() < 1e-12);
        assert_eq!(cabin.concentration_at(p), cabin.concentration_at(p));

        // A refresh replaces the field wholesale.
        cabin.install_field(ConcentrationField::uniform(60.0, vec![0.0], vec![0.0], 4.0).unwrap());
        assert_eq!(cabin.concentration_at(p), 4.0);
    }

    #[test]
    fn infection_counts_by_section() {
        let mut cabin = Cabin::with_seated(
            CabinDimensions::default(),
            &[SeatId(0), SeatId(1), SeatId(150)],
            SimClock::default(),
        )
        .unwrap();
        cabin.agent_by_id_mut(AgentId(0)).unwrap().infect(1.0, InfectionRoute::Airborne);
        cabin.agent_by_id_mut(AgentId(2)).unwrap().infect(2.0, InfectionRoute::Surface);

        let counts = cabin.infection_counts();
        assert_eq!(counts.population, 3);
        assert_eq!(counts.infected, 2);
        assert_eq!(counts.front, 1);
        assert_eq!(counts.rear, 1);
    }
}
