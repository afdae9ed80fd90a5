use crate::charts::price_histogram::{self, PriceHistogram};
use crate::charts::price_odometer::{self, PriceOdometerScatter};
use crate::charts::type_counts::{self, TypeCounts};
use crate::charts::ChartOutcome;
use crate::data::filter::{self, FilterSelection};
use crate::data::model::ListingTable;
use crate::data::schema::DatasetSchema;
use crate::data::summary::{self, SummaryTable};

// ---------------------------------------------------------------------------
// One dashboard run: filter → summarize → shape charts
// ---------------------------------------------------------------------------

/// Everything the page shows for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub filtered: ListingTable,
    pub summary: SummaryTable,
    pub price_histogram: ChartOutcome<PriceHistogram>,
    pub price_odometer: ChartOutcome<PriceOdometerScatter>,
    pub type_counts: ChartOutcome<TypeCounts>,
}

impl DashboardView {
    /// Run the whole pipeline for `selection`. Every output is derived from
    /// the filtered view only, and the shapers are independent of each other.
    pub fn compute(
        table: &ListingTable,
        schema: &DatasetSchema,
        selection: &FilterSelection,
        histogram_bins: usize,
    ) -> Self {
        let filtered = filter::apply(table, schema, selection);
        let summary = summary::describe(&filtered);
        let price_histogram = price_histogram::shape(&filtered, schema, histogram_bins);
        let price_odometer = price_odometer::shape(&filtered, schema);
        let type_counts = type_counts::shape(&filtered, schema);

        log::debug!(
            "Dashboard refreshed: {} listings, histogram ready: {}, scatter ready: {}, types ready: {}",
            filtered.len(),
            price_histogram.is_ready(),
            price_odometer.is_ready(),
            type_counts.is_ready()
        );

        DashboardView {
            selection: selection.clone(),
            filtered,
            summary,
            price_histogram,
            price_odometer,
            type_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::ConditionChoice;
    use crate::data::model::tests::table;

    #[test]
    fn missing_type_does_not_block_other_charts() {
        let t = table(
            &["price", "odometer", "condition"],
            &[&["100", "1000", "good"], &["200", "2000", "fair"]],
        );
        let schema = DatasetSchema::detect(&t);
        let view = DashboardView::compute(&t, &schema, &FilterSelection::initial(&schema), 50);
        assert_eq!(view.type_counts, ChartOutcome::Missing(type_counts::MISSING_TYPE));
        assert!(view.price_histogram.is_ready());
        assert!(view.price_odometer.is_ready());
    }

    #[test]
    fn empty_selection_renders_no_data() {
        let t = table(
            &["price", "odometer", "condition", "type"],
            &[&["100", "1000", "good", "sedan"]],
        );
        let schema = DatasetSchema::detect(&t);
        let selection = FilterSelection {
            year_range: None,
            condition: ConditionChoice::Only("salvage".into()),
        };
        let view = DashboardView::compute(&t, &schema, &selection, 50);
        assert!(view.filtered.is_empty());
        assert_eq!(view.summary.columns.len(), 4);
        assert_eq!(view.price_histogram, ChartOutcome::NoData);
        assert_eq!(view.price_odometer, ChartOutcome::NoData);
        assert_eq!(view.type_counts, ChartOutcome::NoData);
    }
}
