//! Event list controller: turns view actions into backend commands and
//! applies backend results to the model and then the view.
//!
//! The model and view are only touched after the remote call succeeded, so
//! a failed command leaves both as they were.

use crossbeam_channel::{Receiver, Sender};
use shared::domain::EventId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::model::EventsModel;
use crate::ui::view::{EventsView, FormMode, RowHandle, ViewAction};

pub struct EventsController {
    model: EventsModel,
    view: EventsView,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl EventsController {
    pub fn new(
        model: EventsModel,
        view: EventsView,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            model,
            view,
            cmd_tx,
            ui_rx,
        }
    }

    /// Requests the initial event list.
    pub fn start(&mut self) {
        if self.queue(BackendCommand::ListEvents) {
            self.view.set_status("Loading events...");
        }
    }

    pub fn model(&self) -> &EventsModel {
        &self.model
    }

    pub fn view(&self) -> &EventsView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut EventsView {
        &mut self.view
    }

    /// Applies every backend result received so far. Returns how many were applied.
    pub fn process_ui_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::EventsLoaded(events) => {
                self.model.set_events(events);
                self.view.render_events(self.model.events());
                self.view
                    .set_status(format!("Loaded {} events", self.model.events().len()));
            }
            UiEvent::EventCreated(event) => {
                let status = format!("Added \"{}\"", event.event_name);
                self.model.add_event(event.clone());
                self.view.render_new_event(&event);
                self.view.clear_input();
                self.view.set_submitting(false);
                self.view.set_status(status);
            }
            UiEvent::EventUpdated(event) => {
                let status = format!("Saved \"{}\"", event.event_name);
                if !self.model.update_event(event.clone()) {
                    tracing::warn!(event_id = %event.id, "updated event is no longer in the model");
                }
                if !self.view.replace_event_elem(&event) {
                    tracing::warn!(event_id = %event.id, "updated event has no rendered row");
                }
                self.view.clear_input();
                self.view.leave_edit_mode();
                self.view.set_submitting(false);
                self.view.set_status(status);
            }
            UiEvent::EventDeleted(id) => {
                self.model.delete_event(&id);
                if !self.view.remove_event_elem(&id) {
                    tracing::warn!(event_id = %id, "deleted event has no rendered row");
                }
                if self.view.mode() == &FormMode::Edit(id.clone()) {
                    self.view.clear_input();
                    self.view.leave_edit_mode();
                }
                self.view.set_status("Event deleted");
            }
            UiEvent::Error(err) => {
                if let Some(id) = err.event_id() {
                    self.view.set_row_pending(id, false);
                }
                if matches!(
                    err.context(),
                    UiErrorContext::CreateEvent | UiErrorContext::UpdateEvent
                ) {
                    self.view.set_submitting(false);
                }
                self.view.show_error(err);
            }
        }
    }

    pub fn handle_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::Submit => self.submit(),
            ViewAction::Delete(handle) => self.request_delete(handle),
            ViewAction::Edit(handle) => self.begin_edit(handle),
            ViewAction::CancelEdit => {
                self.view.clear_input();
                self.view.leave_edit_mode();
            }
            ViewAction::DismissError => self.view.dismiss_error(),
        }
    }

    fn submit(&mut self) {
        if self.view.is_submitting() {
            return;
        }
        let draft = self.view.read_draft();
        if let Err(reason) = draft.validate() {
            tracing::debug!(%reason, "ignoring incomplete event form");
            return;
        }

        let cmd = match self.view.mode() {
            FormMode::Create => BackendCommand::CreateEvent { draft },
            FormMode::Edit(id) => BackendCommand::UpdateEvent {
                id: id.clone(),
                draft,
            },
        };
        let editing = match &cmd {
            BackendCommand::UpdateEvent { id, .. } => Some(id.clone()),
            _ => None,
        };
        if self.queue(cmd) {
            self.view.set_submitting(true);
            if let Some(id) = editing {
                self.view.set_row_pending(&id, true);
            }
        }
    }

    fn request_delete(&mut self, handle: RowHandle) {
        let Some(id) = self.pending_free_event(handle) else {
            return;
        };
        if self.queue(BackendCommand::DeleteEvent { id: id.clone() }) {
            self.view.set_row_pending(&id, true);
        }
    }

    fn begin_edit(&mut self, handle: RowHandle) {
        if self.view.is_submitting() {
            return;
        }
        let Some(id) = self.pending_free_event(handle) else {
            return;
        };
        match self.model.get_event(&id) {
            Some(event) => self.view.fill_input(event),
            None => tracing::warn!(event_id = %id, "rendered row has no model entry"),
        }
    }

    fn pending_free_event(&self, handle: RowHandle) -> Option<EventId> {
        let Some(id) = self.view.event_id_for(handle) else {
            tracing::warn!(?handle, "action on a row that is no longer rendered");
            return None;
        };
        let pending = self.view.row_for(id).is_some_and(|row| row.is_pending());
        (!pending).then(|| id.clone())
    }

    fn queue(&mut self, cmd: BackendCommand) -> bool {
        dispatch_backend_command(&self.cmd_tx, cmd, self.view.status_mut())
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
