//! Per-tick queue of simulation events

use crate::event::{EventTotals, SimEvent, SimEventKind};

/// Queue the simulation pushes to and observers drain once per tick.
///
/// Draining empties the queue but not the running totals, so a driver can
/// drop events it does not care about and still report counts at the end.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<SimEvent>,
    totals: EventTotals,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        self.totals.record(event.kind());
        self.events.push(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events of one kind, without draining
    pub fn pending(&self, kind: SimEventKind) -> impl Iterator<Item = &SimEvent> {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    /// Events of `kind` pushed since the bus was created
    pub fn total(&self, kind: SimEventKind) -> u64 {
        self.totals.get(kind)
    }

    pub fn totals(&self) -> EventTotals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
