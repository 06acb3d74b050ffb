use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use client_core::{RemoteEventsClient, DEFAULT_EVENTS_URL};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod model;
mod ui;

#[cfg(test)]
mod test_support;

use backend_bridge::commands::BackendCommand;
use controller::{events::UiEvent, EventsController};
use model::EventsModel;
use ui::{EventsGuiApp, EventsView, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Desktop event planner backed by a REST events resource")]
struct Args {
    /// Base URL of the events resource.
    #[arg(long, env = "EVENTS_BASE_URL", default_value = DEFAULT_EVENTS_URL)]
    base_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let startup = StartupConfig {
        base_url: args.base_url,
    };
    let api = RemoteEventsClient::new(&startup.base_url).context("invalid --base-url")?;
    tracing::info!(base_url = %api.base_url(), "starting event planner");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(Arc::new(api), cmd_rx, ui_tx);

    let mut controller =
        EventsController::new(EventsModel::default(), EventsView::new(), cmd_tx, ui_rx);
    controller.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Planner")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Event Planner",
        options,
        Box::new(move |_cc| Ok(Box::new(EventsGuiApp::new(controller, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("event planner window failed: {err}"))
}
