use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Server-assigned identifier of an [`Event`]. Opaque to the client.
///
/// Always written as a string. Read from either a string or an integer,
/// since some servers (json-server among them) hand out numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(text) => Self(text),
            WireId::Unsigned(value) => Self(value.to_string()),
            WireId::Signed(value) => Self(value.to_string()),
        })
    }
}

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub event_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl Event {
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            event_name: draft.event_name,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    pub fn draft(&self) -> EventDraft {
        EventDraft {
            event_name: self.event_name.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }

    /// Date range as shown in the event list, `"start - end"`.
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// The user-supplied fields of an event before the server assigns an id.
/// This is also the exact request body of create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl EventDraft {
    pub fn new(
        event_name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Presence check only: dates are not parsed and start may follow end.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.event_name.is_empty() {
            return Err(DraftError::MissingField("eventName"));
        }
        if self.start_date.is_empty() {
            return Err(DraftError::MissingField("startDate"));
        }
        if self.end_date.is_empty() {
            return Err(DraftError::MissingField("endDate"));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_uses_camel_case_wire_names() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": "1",
            "eventName": "Standup",
            "startDate": "2024-01-01",
            "endDate": "2024-01-01",
        }))
        .expect("decode event");

        assert_eq!(event.id, EventId::from("1"));
        assert_eq!(event.event_name, "Standup");
        assert_eq!(event.date_range(), "2024-01-01 - 2024-01-01");
    }

    #[test]
    fn numeric_id_decodes_and_is_sent_back_as_text() {
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            { "id": 1, "eventName": "Standup", "startDate": "2024-01-01", "endDate": "2024-01-01" },
            { "id": "b7", "eventName": "Retro", "startDate": "2024-01-05", "endDate": "2024-01-05" },
        ]))
        .expect("decode events");

        assert_eq!(events[0].id, EventId::from("1"));
        assert_eq!(events[1].id, EventId::from("b7"));
        assert_eq!(
            serde_json::to_value(&events[0].id).expect("encode id"),
            serde_json::json!("1")
        );
        assert!(serde_json::from_value::<EventId>(serde_json::json!(1.5)).is_err());
    }

    #[test]
    fn draft_serializes_exactly_three_fields() {
        let body = serde_json::to_value(EventDraft::new("Demo", "2024-02-01", "2024-02-02"))
            .expect("encode draft");
        let object = body.as_object().expect("object body");

        assert_eq!(object.len(), 3);
        assert_eq!(object["eventName"], "Demo");
        assert_eq!(object["startDate"], "2024-02-01");
        assert_eq!(object["endDate"], "2024-02-02");
    }

    #[test]
    fn draft_validation_reports_first_missing_field() {
        assert_eq!(
            EventDraft::new("", "2024-01-01", "").validate(),
            Err(DraftError::MissingField("eventName"))
        );
        assert_eq!(
            EventDraft::new("Demo", "2024-01-01", "").validate(),
            Err(DraftError::MissingField("endDate"))
        );
        assert!(!EventDraft::default().is_complete());
    }

    #[test]
    fn draft_accepts_start_after_end() {
        assert!(EventDraft::new("Retro", "2024-03-10", "2024-03-01").is_complete());
    }
}
