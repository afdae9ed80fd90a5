//! Vehicle listings dashboard: a CSV-backed table, sidebar filters, a
//! describe-style summary and three charts, drawn with egui.

pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
