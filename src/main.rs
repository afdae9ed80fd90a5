use anyhow::Context;
use eframe::egui;

use vehicles_dashboard::app::VehiclesDashboardApp;
use vehicles_dashboard::config::DashboardConfig;
use vehicles_dashboard::data::loader::DatasetStore;
use vehicles_dashboard::state::AppState;
use vehicles_dashboard::ui::panels::PAGE_TITLE;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();
    let store = DatasetStore::new(&config.data_path);
    let state = AppState::load(config.clone(), &store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{PAGE_TITLE} 🚗"))
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(VehiclesDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
