//! Runtime bridge between UI command queue and backend event intake.
//!
//! The worker takes one command at a time and awaits its HTTP round-trip
//! before reading the next, so results reach the UI in request order.

use std::{sync::Arc, thread};

use client_core::EventsApi;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    api: Arc<dyn EventsApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::backend_startup(format!(
                    "failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::debug!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let event = execute(api.as_ref(), cmd).await;
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event receiver dropped; stopping backend worker");
                    break;
                }
            }
        });
    })
}

/// Runs one command against the remote resource and reports the outcome as a [`UiEvent`].
pub async fn execute(api: &dyn EventsApi, cmd: BackendCommand) -> UiEvent {
    let name = cmd.name();
    tracing::debug!(command = name, "executing backend command");
    let event = match cmd {
        BackendCommand::ListEvents => match api.list_events().await {
            Ok(events) => UiEvent::EventsLoaded(events),
            Err(err) => UiEvent::Error(UiError::from_client_error(UiErrorContext::LoadEvents, &err)),
        },
        BackendCommand::CreateEvent { draft } => match api.create_event(&draft).await {
            Ok(event) => UiEvent::EventCreated(event),
            Err(err) => {
                UiEvent::Error(UiError::from_client_error(UiErrorContext::CreateEvent, &err))
            }
        },
        BackendCommand::UpdateEvent { id, draft } => match api.update_event(&id, &draft).await {
            Ok(event) => UiEvent::EventUpdated(event),
            Err(err) => UiEvent::Error(
                UiError::from_client_error(UiErrorContext::UpdateEvent, &err).with_event(id),
            ),
        },
        BackendCommand::DeleteEvent { id } => match api.delete_event(&id).await {
            Ok(_) => UiEvent::EventDeleted(id),
            Err(err) => UiEvent::Error(
                UiError::from_client_error(UiErrorContext::DeleteEvent, &err).with_event(id),
            ),
        },
    };
    if let UiEvent::Error(err) = &event {
        tracing::warn!(command = name, error = err.message(), "backend command failed");
    }
    event
}
