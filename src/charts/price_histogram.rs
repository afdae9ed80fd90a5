use crate::data::model::{CellValue, ListingTable};
use crate::data::schema::{DatasetSchema, PRICE};

use super::ChartOutcome;

pub const HISTOGRAM_BINS: usize = 50;
pub const MISSING_PRICE: &str = "Coluna 'price' não encontrada no dataset.";

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistogram {
    pub bins: Vec<HistogramBin>,
}

impl PriceHistogram {
    /// Prices counted across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Price distribution over `bins` equal-width buckets.
pub fn shape(view: &ListingTable, schema: &DatasetSchema, bins: usize) -> ChartOutcome<PriceHistogram> {
    let Some(idx) = schema.index_of(view, PRICE) else {
        return ChartOutcome::Missing(MISSING_PRICE);
    };
    let prices: Vec<f64> = view
        .column_values(idx)
        .filter_map(CellValue::as_f64)
        .filter(|p| p.is_finite())
        .collect();

    match bin_counts(&prices, bins) {
        Some(bins) => ChartOutcome::Ready(PriceHistogram { bins }),
        None => ChartOutcome::NoData,
    }
}

/// Split `[min, max]` of `values` into `bins` equal-width buckets and count
/// memberships. The last bucket includes `max`. A constant sample is centred
/// in a range of width one. `None` for an empty sample or zero bins.
pub fn bin_counts(values: &[f64], bins: usize) -> Option<Vec<HistogramBin>> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let slot = (((v - lo) / width) as usize).min(bins - 1);
        counts[slot] += 1;
    }

    Some(
        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + width * i as f64,
                end: lo + width * (i + 1) as f64,
                count,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::table;

    #[test]
    fn counts_every_price_once() {
        let values: Vec<f64> = (0..=100).map(f64::from).collect();
        let bins = bin_counts(&values, HISTOGRAM_BINS).unwrap();
        assert_eq!(bins.len(), 50);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 101);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[49].end, 100.0);
        // 100 lands in the closed last bin alongside 98 and 99.
        assert_eq!(bins[49].count, 3);
    }

    #[test]
    fn constant_prices_share_one_bin() {
        let bins = bin_counts(&[7.0, 7.0, 7.0], 50).unwrap();
        assert_eq!(bins.iter().filter(|b| b.count > 0).count(), 1);
        assert!(bins[0].start < 7.0 && bins[49].end > 7.0);
    }

    #[test]
    fn missing_price_column_gives_notice() {
        let t = table(&["odometer"], &[&["1"]]);
        let schema = DatasetSchema::detect(&t);
        assert_eq!(shape(&t, &schema, 50), ChartOutcome::Missing(MISSING_PRICE));
    }

    #[test]
    fn null_prices_are_skipped() {
        let t = table(&["price"], &[&["1000"], &[""], &["3000"]]);
        let schema = DatasetSchema::detect(&t);
        let hist = shape(&t, &schema, 50);
        assert_eq!(hist.ready().map(PriceHistogram::total), Some(2));
        assert_eq!(shape(&t.select(&[1]), &schema, 50), ChartOutcome::NoData);
    }
}
