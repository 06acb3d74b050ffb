//! In-memory event collection with optional JSON file persistence.
//!
//! The file layout matches a json-server `db.json`: `{"events": [...]}`.
//! Other top-level keys in an existing file are not preserved.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::domain::{Event, EventDraft, EventId};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Clone)]
pub struct EventStore {
    events: Arc<RwLock<Vec<Event>>>,
    data_file: Option<PathBuf>,
}

impl EventStore {
    pub fn in_memory() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            data_file: None,
        }
    }

    /// Seeds the store from `data_file` when it exists; otherwise starts empty
    /// and creates the file on the first mutation.
    pub async fn open(data_file: PathBuf) -> anyhow::Result<Self> {
        let events = match tokio::fs::read_to_string(&data_file).await {
            Ok(raw) => {
                serde_json::from_str::<EventsDocument>(&raw)
                    .with_context(|| format!("failed to parse '{}'", data_file.display()))?
                    .events
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read '{}'", data_file.display()))
            }
        };
        debug!(count = events.len(), path = %data_file.display(), "loaded events");

        Ok(Self {
            events: Arc::new(RwLock::new(events)),
            data_file: Some(data_file),
        })
    }

    pub async fn list(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    pub async fn insert(&self, draft: EventDraft) -> anyhow::Result<Event> {
        let mut events = self.events.write().await;
        let event = Event::from_draft(fresh_id(&events), draft);
        let mut staged = events.clone();
        staged.push(event.clone());
        self.commit(&mut events, staged).await?;
        Ok(event)
    }

    pub async fn replace(&self, id: &EventId, draft: EventDraft) -> anyhow::Result<Option<Event>> {
        let mut events = self.events.write().await;
        let Some(position) = events.iter().position(|event| &event.id == id) else {
            return Ok(None);
        };
        let updated = Event::from_draft(id.clone(), draft);
        let mut staged = events.clone();
        staged[position] = updated.clone();
        self.commit(&mut events, staged).await?;
        Ok(Some(updated))
    }

    pub async fn remove(&self, id: &EventId) -> anyhow::Result<Option<Event>> {
        let mut events = self.events.write().await;
        let Some(position) = events.iter().position(|event| &event.id == id) else {
            return Ok(None);
        };
        let mut staged = events.clone();
        let removed = staged.remove(position);
        self.commit(&mut events, staged).await?;
        Ok(Some(removed))
    }

    /// Writes `staged` to the data file and only then makes it the live list,
    /// so a failed write leaves memory unchanged.
    async fn commit(&self, live: &mut Vec<Event>, staged: Vec<Event>) -> anyhow::Result<()> {
        self.persist(&staged).await?;
        *live = staged;
        Ok(())
    }

    // Called with the write lock held so file contents follow mutation order.
    async fn persist(&self, events: &[Event]) -> anyhow::Result<()> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("failed to create data directory '{}'", parent.display())
            })?;
        }
        let document = serde_json::json!({ "events": events });
        let raw = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(path, raw)
            .await
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

fn fresh_id(events: &[Event]) -> EventId {
    loop {
        let mut candidate = uuid::Uuid::new_v4().simple().to_string();
        candidate.truncate(8);
        if !events.iter().any(|event| event.id.0 == candidate) {
            return EventId(candidate);
        }
    }
}
