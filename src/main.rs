mod app;
mod color;
mod data;
mod persist;
mod report;
mod state;
mod ui;

use std::path::Path;

use app::SpiceMixerApp;
use eframe::egui;

/// Spice table picked up automatically when it sits in the working directory.
const DEFAULT_TABLE: &str = "spice_flavor_profile.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spice Fusion Mixer",
        options,
        Box::new(|_cc| {
            let mut app = SpiceMixerApp::default();
            let default_table = Path::new(DEFAULT_TABLE);
            if default_table.exists() {
                app.state.load_table_from(default_table);
            }
            Ok(Box::new(app))
        }),
    )
}
