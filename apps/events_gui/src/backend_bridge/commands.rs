//! Backend commands queued from UI to backend worker.

use shared::domain::{EventDraft, EventId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ListEvents,
    CreateEvent { draft: EventDraft },
    UpdateEvent { id: EventId, draft: EventDraft },
    DeleteEvent { id: EventId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListEvents => "list_events",
            Self::CreateEvent { .. } => "create_event",
            Self::UpdateEvent { .. } => "update_event",
            Self::DeleteEvent { .. } => "delete_event",
        }
    }
}
