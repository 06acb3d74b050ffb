//! In-memory event sequence for the current session.

use shared::domain::{Event, EventId};

/// Ordered events as last confirmed by the remote resource. Only the
/// controller mutates it, and only after the matching remote call succeeded.
#[derive(Debug, Default, Clone)]
pub struct EventsModel {
    events: Vec<Event>,
}

impl EventsModel {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get_event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replaces the first event with the same id, keeping its position.
    pub fn update_event(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|current| current.id == event.id) {
            Some(slot) => {
                *slot = event;
                true
            }
            None => false,
        }
    }

    /// Removes the first event with `id`. Unknown ids are a no-op.
    pub fn delete_event(&mut self, id: &EventId) -> bool {
        match self.events.iter().position(|event| &event.id == id) {
            Some(position) => {
                self.events.remove(position);
                true
            }
            None => false,
        }
    }
}
