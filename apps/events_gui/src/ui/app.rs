use std::time::Duration;

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::controller::EventsController;
use crate::ui::view::{EventsView, FormMode, ViewAction};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub base_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            base_url: client_core::DEFAULT_EVENTS_URL.to_string(),
        }
    }
}

pub struct EventsGuiApp {
    controller: EventsController,
    startup: StartupConfig,
}

impl EventsGuiApp {
    pub fn new(controller: EventsController, startup: StartupConfig) -> Self {
        Self {
            controller,
            startup,
        }
    }
}

impl eframe::App for EventsGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_ui_events();

        let mut actions = Vec::new();
        let view = self.controller.view_mut();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Event Planner");
                ui.label(egui::RichText::new(&self.startup.base_url).weak().small());
            });
            show_status_banner(ui, view, &mut actions);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(view.status()).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                show_event_form(ui, view, &mut actions);
            });
            ui.add_space(8.0);
            show_event_list(ui, view, &mut actions);
        });

        for action in actions {
            self.controller.handle_action(action);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn show_status_banner(ui: &mut egui::Ui, view: &EventsView, actions: &mut Vec<ViewAction>) {
    let Some(text) = view.banner().map(|err| err.summary()) else {
        return;
    };
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(egui::Color32::from_rgb(0xE0, 0x5A, 0x5A), text);
        if ui.small_button("Dismiss").clicked() {
            actions.push(ViewAction::DismissError);
        }
    });
}

fn show_event_form(ui: &mut egui::Ui, view: &mut EventsView, actions: &mut Vec<ViewAction>) {
    let editing = matches!(view.mode(), FormMode::Edit(_));
    let submitting = view.is_submitting();
    let mut submitted = false;

    ui.label(egui::RichText::new(if editing { "Edit event" } else { "New event" }).strong());
    egui::Grid::new("event_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            let form = view.form_mut();
            ui.label("Event name");
            let name = ui.add(egui::TextEdit::singleline(&mut form.event_name).hint_text("Event name"));
            ui.end_row();

            ui.label("Start date");
            date_picker(ui, "start_date", &mut form.start_date);
            ui.end_row();

            ui.label("End date");
            date_picker(ui, "end_date", &mut form.end_date);
            ui.end_row();

            let enter = ui.input(|input| input.key_pressed(egui::Key::Enter));
            submitted = enter && name.lost_focus();
        });

    ui.horizontal(|ui| {
        let label = if editing { "Save" } else { "Add event" };
        if ui.add_enabled(!submitting, egui::Button::new(label)).clicked() {
            submitted = true;
        }
        if editing && ui.add_enabled(!submitting, egui::Button::new("Cancel")).clicked() {
            actions.push(ViewAction::CancelEdit);
        }
        if submitting {
            ui.spinner();
        }
    });

    if submitted {
        actions.push(ViewAction::Submit);
    }
}

fn date_picker(ui: &mut egui::Ui, salt: &str, date: &mut Option<NaiveDate>) {
    ui.horizontal(|ui| match date {
        Some(picked) => {
            ui.add(DatePickerButton::new(picked).id_salt(salt));
            if ui.small_button("Clear").clicked() {
                *date = None;
            }
        }
        None => {
            if ui.button("Pick date").clicked() {
                *date = Some(chrono::Local::now().date_naive());
            }
        }
    });
}

fn show_event_list(ui: &mut egui::Ui, view: &EventsView, actions: &mut Vec<ViewAction>) {
    if view.rows().is_empty() {
        ui.label(egui::RichText::new("No events yet.").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in view.rows() {
                ui.push_id(row.handle(), |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(row.name()).strong());
                                ui.label(row.dates());
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let enabled = !row.is_pending();
                                    if ui.add_enabled(enabled, egui::Button::new("Delete")).clicked() {
                                        actions.push(ViewAction::Delete(row.handle()));
                                    }
                                    if ui.add_enabled(enabled, egui::Button::new("Edit")).clicked() {
                                        actions.push(ViewAction::Edit(row.handle()));
                                    }
                                    if row.is_pending() {
                                        ui.spinner();
                                    }
                                },
                            );
                        });
                    });
                });
            }
        });
}
