use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::ListingTable;
use crate::data::summary::SummaryTable;

const ROW_HEIGHT: f32 = 18.0;
const MISSING: &str = "NaN";

/// Scrollable grid of listings with a leading row-number column.
pub fn listing_table(ui: &mut Ui, id: &str, table: &ListingTable, max_height: f32) {
    egui::ScrollArea::horizontal().id_salt(id).show(ui, |ui: &mut Ui| {
        ui.push_id(id, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(max_height)
                .column(Column::auto().at_least(40.0))
                .columns(Column::auto().at_least(70.0), table.columns.len())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    for column in &table.columns {
                        header.col(|ui| {
                            ui.strong(&column.name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, table.len(), |mut row| {
                        let idx = row.index();
                        row.col(|ui| {
                            ui.weak(idx.to_string());
                        });
                        for cell in &table.rows[idx].cells {
                            row.col(|ui| {
                                if !cell.is_null() {
                                    ui.label(cell.to_string());
                                }
                            });
                        }
                    });
                });
        });
    });
}

/// The describe() grid: one row per statistic, one column per dataset column.
pub fn summary_table(ui: &mut Ui, summary: &SummaryTable) {
    egui::ScrollArea::horizontal().id_salt("summary").show(ui, |ui: &mut Ui| {
        ui.push_id("summary", |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(50.0))
                .columns(Column::auto().at_least(80.0), summary.columns.len())
                .header(20.0, |mut header| {
                    header.col(|_| {});
                    for column in &summary.columns {
                        header.col(|ui| {
                            ui.strong(&column.name);
                        });
                    }
                })
                .body(|mut body| {
                    for stat in &summary.statistics {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.strong(stat.label());
                            });
                            for column in &summary.columns {
                                let text = column
                                    .value(*stat)
                                    .map(|v| v.to_string())
                                    .unwrap_or_else(|| MISSING.to_string());
                                row.col(|ui| {
                                    ui.label(text);
                                });
                            }
                        });
                    }
                });
        });
    });
}
