use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::charts::price_histogram::PriceHistogram;
use crate::charts::price_odometer::PriceOdometerScatter;
use crate::charts::type_counts::TypeCounts;
use crate::charts::ChartOutcome;
use crate::color::ColorMap;
use crate::state::AppState;
use crate::ui::panels::{info, subheader};

const NO_DATA: &str = "Nenhum anúncio corresponde aos filtros selecionados.";
const BAR_COLOR: Color32 = Color32::from_rgb(0x63, 0x6e, 0xfa);

// ---------------------------------------------------------------------------
// Chart section (central panel, below the summary)
// ---------------------------------------------------------------------------

/// Render the three charts, each independently of the others.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let Ok(data) = &state.data else {
        return;
    };
    let height = state.config.chart_height;
    let view = &data.view;

    chart_section(ui, "Distribuição de preços dos veículos", &view.price_histogram, |ui, hist| {
        price_histogram(ui, hist, height)
    });
    chart_section(ui, "Relação entre preço e quilometragem", &view.price_odometer, |ui, scatter| {
        price_odometer(ui, scatter, &data.color_map, height)
    });
    chart_section(ui, "Contagem de veículos por tipo", &view.type_counts, |ui, counts| {
        type_counts(ui, counts, height)
    });
}

fn chart_section<T>(
    ui: &mut Ui,
    title: &str,
    outcome: &ChartOutcome<T>,
    draw: impl FnOnce(&mut Ui, &T),
) {
    match outcome {
        ChartOutcome::Ready(data) => {
            subheader(ui, title);
            draw(ui, data);
        }
        ChartOutcome::NoData => {
            subheader(ui, title);
            info(ui, NO_DATA);
        }
        ChartOutcome::Missing(notice) => {
            ui.add_space(12.0);
            info(ui, notice);
        }
    }
}

fn price_histogram(ui: &mut Ui, hist: &PriceHistogram, height: f32) {
    ui.strong("Distribuição de preços");
    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("{:.0} – {:.0}", b.start, b.end))
        })
        .collect();

    Plot::new("price_histogram")
        .height(height)
        .x_axis_label("price")
        .y_axis_label("count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
        });
}

fn price_odometer(ui: &mut Ui, scatter: &PriceOdometerScatter, colors: &ColorMap, height: f32) {
    ui.strong("Preço vs Quilometragem por condição");
    Plot::new("price_odometer")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("odometer")
        .y_axis_label("price")
        .allow_boxed_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let color = colors
                    .color_for(&series.group)
                    .gamma_multiply(scatter.opacity);
                let mut points = Points::new(series.points.clone())
                    .color(color)
                    .radius(2.0);
                if let Some(label) = series.group.label() {
                    points = points.name(label);
                }
                plot_ui.points(points);
            }
        });
}

fn type_counts(ui: &mut Ui, counts: &TypeCounts, height: f32) {
    let [label_column, count_column] = counts.column_labels();
    ui.strong("Quantidade de veículos por tipo");

    let bars: Vec<Bar> = counts
        .rows
        .iter()
        .enumerate()
        .map(|(i, (label, n))| Bar::new(i as f64, *n as f64).width(0.8).name(label))
        .collect();
    let labels: Vec<String> = counts.rows.iter().map(|(label, _)| label.clone()).collect();

    Plot::new("type_counts")
        .height(height)
        .x_axis_label(label_column)
        .y_axis_label(count_column)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
        });
}
