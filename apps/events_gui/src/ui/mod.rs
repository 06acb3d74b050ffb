//! UI layer: the retained event list document and its egui painter.

pub mod app;
pub mod view;

pub use app::{EventsGuiApp, StartupConfig};
pub use view::EventsView;
