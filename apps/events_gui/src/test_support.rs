//! In-process stand-in for the remote events resource.

use std::sync::Mutex;

use async_trait::async_trait;
use client_core::{ClientError, EventsApi, Result};
use shared::domain::{Event, EventDraft, EventId};

#[derive(Default)]
pub struct FakeEventsApi {
    events: Mutex<Vec<Event>>,
    next_id: Mutex<u32>,
    unavailable: bool,
}

impl FakeEventsApi {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    pub fn failing_transport() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(ClientError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(id: &EventId) -> ClientError {
        ClientError::Status {
            status: 404,
            message: format!("event {id} not found"),
        }
    }
}

#[async_trait]
impl EventsApi for FakeEventsApi {
    async fn list_events(&self) -> Result<Vec<Event>> {
        self.check_available()?;
        Ok(self.events.lock().expect("events lock").clone())
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        self.check_available()?;
        let mut next_id = self.next_id.lock().expect("id lock");
        *next_id += 1;
        let event = Event::from_draft(EventId(next_id.to_string()), draft.clone());
        self.events.lock().expect("events lock").push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event> {
        self.check_available()?;
        let mut events = self.events.lock().expect("events lock");
        let slot = events
            .iter_mut()
            .find(|event| &event.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = Event::from_draft(id.clone(), draft.clone());
        Ok(slot.clone())
    }

    async fn delete_event(&self, id: &EventId) -> Result<serde_json::Value> {
        self.check_available()?;
        let mut events = self.events.lock().expect("events lock");
        let position = events
            .iter()
            .position(|event| &event.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        let removed = events.remove(position);
        Ok(serde_json::to_value(removed)?)
    }
}
