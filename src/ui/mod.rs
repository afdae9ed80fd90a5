//! egui rendering. Nothing here computes data; it draws a `DashboardView`.

pub mod panels;
pub mod plot;
pub mod tables;
