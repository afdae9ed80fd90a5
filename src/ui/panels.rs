use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::tables;

pub const PAGE_TITLE: &str = "Vehicles Dashboard MX";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros");
    ui.separator();

    let Ok(data) = &state.data else {
        return;
    };
    // Copy what we need so we can mutate state below.
    let year_bounds = data.schema.year_bounds;
    let condition_options = data.schema.condition_options.clone();

    // ---- Model year range ----
    ui.strong("Ano do modelo");
    match (year_bounds, state.year_range) {
        (Some((lo, hi)), Some((mut from, mut to))) => {
            if ui
                .add(egui::Slider::new(&mut from, lo..=hi).text("de"))
                .changed()
            {
                state.set_year_min(from);
            }
            if ui
                .add(egui::Slider::new(&mut to, lo..=hi).text("até"))
                .changed()
            {
                state.set_year_max(to);
            }
        }
        _ => {
            ui.label(RichText::new("Filtro de ano indisponível neste dataset.").weak());
        }
    }
    ui.add_space(8.0);

    // ---- Condition ----
    if let Some(options) = condition_options {
        ui.strong("Condição do veículo");
        let current = state.condition.as_option().to_string();
        egui::ComboBox::from_id_salt("condition")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for option in &options {
                    if ui.selectable_label(current == *option, option).clicked() {
                        state.set_condition(option);
                    }
                }
            });
    }

    ui.separator();
    if let Ok(data) = &state.data {
        ui.label(format!(
            "{} de {} anúncios selecionados",
            data.view.filtered.len(),
            data.table.len()
        ));
    }
}

// ---------------------------------------------------------------------------
// Page body – title, sample, raw data and summary
// ---------------------------------------------------------------------------

/// Title, sample panel, raw-data toggle and the statistics table.
pub fn page_body(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        config,
        data,
        show_raw_data,
        ..
    } = state;
    let Ok(data) = data else {
        return;
    };

    ui.heading(RichText::new(PAGE_TITLE).size(28.0).strong());
    ui.label("Análise exploratória dos anúncios de veículos (dataset `vehicles_us`).");
    ui.add_space(8.0);

    egui::CollapsingHeader::new("Ver amostra dos dados")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            tables::listing_table(ui, "sample", &data.table.head(config.sample_rows), 200.0);
            let (rows, cols) = data.table.shape();
            ui.label(format!("Formato do dataset: ({rows}, {cols})"));
        });
    ui.add_space(8.0);

    ui.checkbox(show_raw_data, "Mostrar tabela de dados brutos");
    if *show_raw_data {
        subheader(ui, "Tabela de dados filtrados");
        tables::listing_table(ui, "raw_data", &data.view.filtered, 360.0);
    }

    subheader(ui, "Resumo dos dados filtrados");
    tables::summary_table(ui, &data.view.summary);
}

pub fn subheader(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).size(20.0).strong());
    ui.add_space(4.0);
}

/// Informational notice shown in place of a chart.
pub fn info(ui: &mut Ui, text: &str) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(0xe8, 0xf1, 0xfb))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(Color32::from_rgb(0x1c, 0x4e, 0x80)));
        });
}

// ---------------------------------------------------------------------------
// Fatal load error
// ---------------------------------------------------------------------------

pub fn load_error(ui: &mut Ui, message: &str) {
    ui.heading(PAGE_TITLE);
    ui.separator();
    ui.label(RichText::new(message).color(Color32::RED));
}
