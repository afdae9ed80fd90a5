use std::path::PathBuf;

use crate::charts::price_histogram::HISTOGRAM_BINS;

/// Dataset file, relative to the working directory.
pub const DATA_PATH: &str = "vehicles_us.csv";

/// Static dashboard settings. There is no config file or environment
/// override; `Default` is the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Buckets in the price histogram.
    pub histogram_bins: usize,
    /// Rows shown in the sample panel.
    pub sample_rows: usize,
    /// Height of each chart in points.
    pub chart_height: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_PATH),
            histogram_bins: HISTOGRAM_BINS,
            sample_rows: 5,
            chart_height: 320.0,
            window_size: [1280.0, 900.0],
            min_window_size: [640.0, 480.0],
        }
    }
}
