use shared::{
    domain::{Event, EventDraft, EventId},
    error::{ApiError, ErrorCode},
};

use crate::store::EventStore;

#[derive(Clone)]
pub struct ApiContext {
    pub store: EventStore,
}

pub fn events_route() -> &'static str {
    "/events"
}

pub fn event_route() -> &'static str {
    "/events/:id"
}

pub async fn list_events(ctx: &ApiContext) -> Vec<Event> {
    ctx.store.list().await
}

pub async fn create_event(ctx: &ApiContext, draft: EventDraft) -> Result<Event, ApiError> {
    validate(&draft)?;
    ctx.store.insert(draft).await.map_err(internal)
}

pub async fn update_event(
    ctx: &ApiContext,
    id: &EventId,
    draft: EventDraft,
) -> Result<Event, ApiError> {
    validate(&draft)?;
    ctx.store
        .replace(id, draft)
        .await
        .map_err(internal)?
        .ok_or_else(|| not_found(id))
}

pub async fn delete_event(ctx: &ApiContext, id: &EventId) -> Result<Event, ApiError> {
    ctx.store
        .remove(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| not_found(id))
}

fn validate(draft: &EventDraft) -> Result<(), ApiError> {
    draft
        .validate()
        .map_err(|err| ApiError::new(ErrorCode::Validation, err.to_string()))
}

fn not_found(id: &EventId) -> ApiError {
    ApiError::new(ErrorCode::NotFound, format!("event {id} not found"))
}

fn internal(err: anyhow::Error) -> ApiError {
    tracing::error!(error = %err, "event store failure");
    ApiError::new(ErrorCode::Internal, err.to_string())
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
