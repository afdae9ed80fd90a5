//! Chart data shaping. Each shaper reads only the filtered view and returns
//! plot-ready data, or a notice when its columns are missing.

pub mod price_histogram;
pub mod price_odometer;
pub mod type_counts;

/// Result of shaping one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome<T> {
    Ready(T),
    /// Columns are present but the view has nothing to draw.
    NoData,
    /// A required column is absent; carries the notice shown instead.
    Missing(&'static str),
}

impl<T> ChartOutcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartOutcome::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ChartOutcome::Ready(_))
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ChartOutcome::Missing(notice) => Some(*notice),
            _ => None,
        }
    }
}
