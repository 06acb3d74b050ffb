//! HTTP client for the remote events resource.
//!
//! All four operations are relative to one base URL (for example
//! `http://localhost:3000/events`). Nothing is retried and no application
//! timeout is applied; failures come back as [`ClientError`] values.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Event, EventDraft, EventId},
    error::ApiError,
};
use tracing::debug;
use url::Url;

pub mod error;

pub use error::{ClientError, ClientErrorKind, Result};

pub const DEFAULT_EVENTS_URL: &str = "http://localhost:3000/events";

/// The four logical operations against the events resource.
#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>>;
    async fn create_event(&self, draft: &EventDraft) -> Result<Event>;
    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event>;
    /// The response shape is server-defined; an empty body yields `Value::Null`.
    async fn delete_event(&self, id: &EventId) -> Result<serde_json::Value>;
}

#[derive(Debug, Clone)]
pub struct RemoteEventsClient {
    http: Client,
    base_url: Url,
}

impl RemoteEventsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn event_url(&self, id: &EventId) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects cannot-be-a-base urls, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: &str| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(raw.trim()).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    url.path_segments_mut()
        .map_err(|_| invalid("url cannot be a base"))?
        .pop_if_empty();
    Ok(url)
}

async fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let message = serde_json::from_str::<ApiError>(&body)
            .map(|api_error| api_error.message)
            .unwrap_or(body);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(body)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = read_body(response).await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl EventsApi for RemoteEventsClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.http.get(self.base_url.clone()).send().await?;
        let events: Vec<Event> = read_json(response).await?;
        debug!(count = events.len(), "listed events");
        Ok(events)
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        let response = self
            .http
            .post(self.base_url.clone())
            .json(draft)
            .send()
            .await?;
        let event: Event = read_json(response).await?;
        debug!(event_id = %event.id, "created event");
        Ok(event)
    }

    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event> {
        let response = self.http.put(self.event_url(id)).json(draft).send().await?;
        let event: Event = read_json(response).await?;
        debug!(event_id = %event.id, "updated event");
        Ok(event)
    }

    async fn delete_event(&self, id: &EventId) -> Result<serde_json::Value> {
        let response = self.http.delete(self.event_url(id)).send().await?;
        let body = read_body(response).await?;
        debug!(event_id = %id, "deleted event");
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
