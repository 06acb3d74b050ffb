use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::{Event, EventDraft, EventId},
    error::{ApiError, ErrorCode},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod store;

use api::{event_route, events_route, ApiContext};
use config::load_settings;
use store::EventStore;

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let store = match &settings.data_file {
        Some(path) => EventStore::open(path.clone()).await.map_err(|error| {
            error!(path = %path.display(), %error, "failed to open events data file");
            error
        })?,
        None => EventStore::in_memory(),
    };
    let state = AppState {
        api: ApiContext { store },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, persistent = settings.data_file.is_some(), "events server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(events_route(), get(http_list_events).post(http_create_event))
        .route(event_route(), axum::routing::put(http_update_event).delete(http_delete_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: ApiError) -> (StatusCode, Json<ApiError>) {
    (status_for(err.code), Json(err))
}

fn read_draft(body: Result<Json<EventDraft>, JsonRejection>) -> Result<EventDraft, ApiError> {
    body.map(|Json(draft)| draft)
        .map_err(|rejection| ApiError::new(ErrorCode::Validation, rejection.body_text()))
}

async fn http_list_events(State(state): State<Arc<AppState>>) -> Json<Vec<Event>> {
    Json(api::list_events(&state.api).await)
}

async fn http_create_event(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EventDraft>, JsonRejection>,
) -> ApiResult<Event> {
    let draft = read_draft(body).map_err(reject)?;
    let event = api::create_event(&state.api, draft).await.map_err(reject)?;
    info!(event_id = %event.id, "event created");
    Ok(Json(event))
}

async fn http_update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<EventDraft>, JsonRejection>,
) -> ApiResult<Event> {
    let draft = read_draft(body).map_err(reject)?;
    let event = api::update_event(&state.api, &EventId(id), draft)
        .await
        .map_err(reject)?;
    info!(event_id = %event.id, "event updated");
    Ok(Json(event))
}

async fn http_delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Event> {
    let event = api::delete_event(&state.api, &EventId(id))
        .await
        .map_err(reject)?;
    info!(event_id = %event.id, "event deleted");
    Ok(Json(event))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
