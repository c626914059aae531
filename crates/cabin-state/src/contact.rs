//! Seat-collision log.

use cabin_core::{AgentId, Point2};

/// One passenger brushing a seat: where and when.  Events sharing a rounded
/// position stand in for a shared touch-point (headrest, armrest).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactEvent {
    pub time:     f64,
    pub agent:    AgentId,
    /// The colliding position, before collision resolution moved the agent.
    pub position: Point2,
}

/// Append-only, time-ordered record of contact events.
#[derive(Clone, Debug, Default)]
pub struct ContactLog {
    events: Vec<ContactEvent>,
}

impl ContactLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: ContactEvent) {
        debug_assert!(
            self.events.last().is_none_or(|last| last.time <= event.time),
            "contact events must be recorded in time order"
        );
        self.events.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[ContactEvent] {
        &self.events
    }

    /// Events with `now - time < window`, oldest first.
    pub fn recent(&self, now: f64, window: f64) -> impl Iterator<Item = &ContactEvent> + '_ {
        // Time-ordered, so everything at or after the first in-window event
        // is in the window.
        let start = self.events.partition_point(|e| now - e.time >= window);
        self.events[start..].iter()
    }
}
