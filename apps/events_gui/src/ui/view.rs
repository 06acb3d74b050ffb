//! Presentation document for the event list: the form, the rendered rows,
//! and the status line. Painting lives in [`crate::ui::app`].
//!
//! Rows are addressed by a [`RowHandle`] the view allocates itself. The
//! event id is kept separately and mapped to its handle, so removing an
//! event that was never rendered is reported instead of failing.

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::domain::{Event, EventDraft, EventId};

use crate::controller::events::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    handle: RowHandle,
    event_id: EventId,
    name: String,
    dates: String,
    pending: bool,
}

impl EventRow {
    pub fn handle(&self) -> RowHandle {
        self.handle
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dates(&self) -> &str {
        &self.dates
    }

    /// A delete or edit for this row is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Wire format for event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates are picked, not typed; `None` means nothing picked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub event_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(EventId),
}

/// User intents collected while painting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Submit,
    Delete(RowHandle),
    Edit(RowHandle),
    CancelEdit,
    DismissError,
}

#[derive(Debug, Default)]
pub struct EventsView {
    form: EventForm,
    mode: FormMode,
    submitting: bool,
    rows: Vec<EventRow>,
    index: HashMap<EventId, RowHandle>,
    next_handle: u64,
    status: String,
    banner: Option<UiError>,
}

impl EventsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    pub fn row_for(&self, id: &EventId) -> Option<&EventRow> {
        let handle = self.index.get(id)?;
        self.rows.iter().find(|row| row.handle == *handle)
    }

    pub fn event_id_for(&self, handle: RowHandle) -> Option<&EventId> {
        self.rows
            .iter()
            .find(|row| row.handle == handle)
            .map(EventRow::event_id)
    }

    /// Clears the list and rebuilds one row per event, in order.
    pub fn render_events(&mut self, events: &[Event]) {
        self.rows.clear();
        self.index.clear();
        for event in events {
            self.render_new_event(event);
        }
    }

    pub fn render_new_event(&mut self, event: &Event) {
        let row = self.create_event_element(event);
        // The first row rendered for an id stays the one it resolves to.
        self.index.entry(row.event_id.clone()).or_insert(row.handle);
        self.rows.push(row);
    }

    /// Returns `false` when no row is rendered for `id`.
    pub fn remove_event_elem(&mut self, id: &EventId) -> bool {
        let Some(handle) = self.index.remove(id) else {
            return false;
        };
        self.rows.retain(|row| row.handle != handle);
        if let Some(next) = self.rows.iter().find(|row| &row.event_id == id) {
            self.index.insert(id.clone(), next.handle);
        }
        true
    }

    /// Re-renders the row for `event.id` in place.
    pub fn replace_event_elem(&mut self, event: &Event) -> bool {
        let Some(handle) = self.index.get(&event.id).copied() else {
            return false;
        };
        let Some(row) = self.rows.iter_mut().find(|row| row.handle == handle) else {
            return false;
        };
        row.name = event.event_name.clone();
        row.dates = event.date_range();
        row.pending = false;
        true
    }

    fn create_event_element(&mut self, event: &Event) -> EventRow {
        let handle = RowHandle(self.next_handle);
        self.next_handle += 1;
        EventRow {
            handle,
            event_id: event.id.clone(),
            name: event.event_name.clone(),
            dates: event.date_range(),
            pending: false,
        }
    }

    pub fn set_row_pending(&mut self, id: &EventId, pending: bool) {
        let Some(handle) = self.index.get(id).copied() else {
            return;
        };
        if let Some(row) = self.rows.iter_mut().find(|row| row.handle == handle) {
            row.pending = pending;
        }
    }

    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    pub fn read_draft(&self) -> EventDraft {
        EventDraft::new(
            self.form.event_name.clone(),
            format_date(self.form.start_date),
            format_date(self.form.end_date),
        )
    }

    pub fn clear_input(&mut self) {
        self.form = EventForm::default();
    }

    /// Loads `event` into the form and switches the submit control to save it.
    /// A stored date that is not `YYYY-MM-DD` leaves its picker empty.
    pub fn fill_input(&mut self, event: &Event) {
        self.form = EventForm {
            event_name: event.event_name.clone(),
            start_date: parse_date(&event.start_date),
            end_date: parse_date(&event.end_date),
        };
        self.mode = FormMode::Edit(event.id.clone());
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn leave_edit_mode(&mut self) {
        self.mode = FormMode::Create;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut String {
        &mut self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn banner(&self) -> Option<&UiError> {
        self.banner.as_ref()
    }

    pub fn show_error(&mut self, err: UiError) {
        self.status = err.summary();
        self.banner = Some(err);
    }

    pub fn dismiss_error(&mut self) {
        self.banner = None;
    }
}
