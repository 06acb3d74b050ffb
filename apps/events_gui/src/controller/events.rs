//! UI/backend events and error modeling for the event planner controller.

use client_core::{ClientError, ClientErrorKind};
use shared::domain::{Event, EventId};

#[derive(Debug, Clone)]
pub enum UiEvent {
    EventsLoaded(Vec<Event>),
    EventCreated(Event),
    EventUpdated(Event),
    EventDeleted(EventId),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadEvents,
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
}

impl UiErrorContext {
    fn action_label(self) -> &'static str {
        match self {
            Self::BackendStartup => "start the backend worker",
            Self::LoadEvents => "load events",
            Self::CreateEvent => "add the event",
            Self::UpdateEvent => "save the event",
            Self::DeleteEvent => "delete the event",
        }
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Decode => "Response",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
    event_id: Option<EventId>,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err.kind() {
            ClientErrorKind::Transport | ClientErrorKind::Status => UiErrorCategory::Transport,
            ClientErrorKind::Decode => UiErrorCategory::Decode,
            ClientErrorKind::Config => UiErrorCategory::Validation,
        };
        Self {
            category,
            context,
            message: err.to_string(),
            event_id: None,
        }
    }

    /// The backend worker could not start, so no request was made.
    pub fn backend_startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
            event_id: None,
        }
    }

    pub fn with_event(mut self, id: EventId) -> Self {
        self.event_id = Some(id);
        self
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn event_id(&self) -> Option<&EventId> {
        self.event_id.as_ref()
    }

    /// One-line text for the error banner.
    pub fn summary(&self) -> String {
        format!(
            "{} error: could not {}: {}",
            err_label(self.category),
            self.context.action_label(),
            self.message
        )
    }
}
