use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VehiclesDashboardApp {
    pub state: AppState,
}

impl VehiclesDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for VehiclesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(message) = &self.state.data {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::load_error(ui, message);
            });
            return;
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Widgets may have changed above; rebuild the view before drawing it.
        self.state.refresh();

        // ---- Central panel: page body and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::page_body(ui, &mut self.state);
                    plot::charts(ui, &self.state);
                });
        });
    }
}
