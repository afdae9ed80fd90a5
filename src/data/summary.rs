use std::collections::HashMap;
use std::fmt;

use super::model::{CellValue, ColumnKind, ListingTable};

// ---------------------------------------------------------------------------
// Statistic rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Count,
    Unique,
    Top,
    Freq,
    Mean,
    Std,
    Min,
    Q25,
    Median,
    Q75,
    Max,
}

const CATEGORICAL_STATS: [Statistic; 3] = [Statistic::Unique, Statistic::Top, Statistic::Freq];
const NUMERIC_STATS: [Statistic; 7] = [
    Statistic::Mean,
    Statistic::Std,
    Statistic::Min,
    Statistic::Q25,
    Statistic::Median,
    Statistic::Q75,
    Statistic::Max,
];

impl Statistic {
    pub fn label(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Unique => "unique",
            Statistic::Top => "top",
            Statistic::Freq => "freq",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Q25 => "25%",
            Statistic::Median => "50%",
            Statistic::Q75 => "75%",
            Statistic::Max => "max",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-column summaries
// ---------------------------------------------------------------------------

/// One cell of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Count(usize),
    Number(f64),
    Text(String),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Count(n) => write!(f, "{n}"),
            SummaryValue::Number(v) => write!(f, "{v:.2}"),
            SummaryValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSummary {
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoricalSummary {
    pub unique: usize,
    pub top: Option<String>,
    pub freq: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    /// Non-null cells.
    pub count: usize,
    pub stats: ColumnStats,
}

impl ColumnSummary {
    /// Value for a statistic row; `None` where it does not apply or is undefined.
    pub fn value(&self, stat: Statistic) -> Option<SummaryValue> {
        use Statistic::*;
        match (&self.stats, stat) {
            (_, Count) => Some(SummaryValue::Count(self.count)),
            (ColumnStats::Categorical(c), Unique) => Some(SummaryValue::Count(c.unique)),
            (ColumnStats::Categorical(c), Top) => c.top.clone().map(SummaryValue::Text),
            (ColumnStats::Categorical(c), Freq) => c.freq.map(SummaryValue::Count),
            (ColumnStats::Numeric(n), _) => {
                let v = match stat {
                    Mean => n.mean,
                    Std => n.std,
                    Min => n.min,
                    Q25 => n.q25,
                    Median => n.median,
                    Q75 => n.q75,
                    Max => n.max,
                    _ => None,
                };
                v.map(SummaryValue::Number)
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SummaryTable – describe() over a whole view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Statistic rows, in display order.
    pub statistics: Vec<Statistic>,
    /// One entry per view column, in the view's column order.
    pub columns: Vec<ColumnSummary>,
}

impl SummaryTable {
    pub fn cell(&self, stat: Statistic, column: &str) -> Option<SummaryValue> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .and_then(|c| c.value(stat))
    }
}

/// Descriptive statistics over every column of `view`, numeric and
/// categorical combined. The row set only depends on the column kinds, so it
/// is the same for any filtered view of one dataset.
pub fn describe(view: &ListingTable) -> SummaryTable {
    let has_kind = |kind| view.columns.iter().any(|c| c.kind == kind);

    let mut statistics = vec![Statistic::Count];
    if has_kind(ColumnKind::Categorical) {
        statistics.extend(CATEGORICAL_STATS);
    }
    if has_kind(ColumnKind::Numeric) {
        statistics.extend(NUMERIC_STATS);
    }

    let columns = view
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let cells = view.column_values(idx).filter(|v| !v.is_null());
            match column.kind {
                ColumnKind::Numeric => {
                    let values: Vec<f64> = cells.filter_map(CellValue::as_f64).collect();
                    ColumnSummary {
                        name: column.name.clone(),
                        count: values.len(),
                        stats: ColumnStats::Numeric(numeric_summary(values)),
                    }
                }
                ColumnKind::Categorical => {
                    let labels: Vec<String> = cells.map(|v| v.to_string()).collect();
                    ColumnSummary {
                        name: column.name.clone(),
                        count: labels.len(),
                        stats: ColumnStats::Categorical(categorical_summary(&labels)),
                    }
                }
            }
        })
        .collect();

    SummaryTable {
        statistics,
        columns,
    }
}

fn numeric_summary(mut values: Vec<f64>) -> NumericSummary {
    if values.is_empty() {
        return NumericSummary::default();
    }
    values.sort_by(f64::total_cmp);

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.len() > 1).then(|| {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        var.sqrt()
    });

    NumericSummary {
        mean: Some(mean),
        std,
        min: values.first().copied(),
        q25: Some(quantile(&values, 0.25)),
        median: Some(quantile(&values, 0.5)),
        q75: Some(quantile(&values, 0.75)),
        max: values.last().copied(),
    }
}

/// Linear-interpolated quantile of sorted, non-empty `values`.
fn quantile(values: &[f64], q: f64) -> f64 {
    let pos = q * (values.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    values[lo] + (values[hi] - values[lo]) * (pos - lo as f64)
}

fn categorical_summary(labels: &[String]) -> CategoricalSummary {
    // label -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, label) in labels.iter().enumerate() {
        counts.entry(label.as_str()).or_insert((0, pos)).0 += 1;
    }

    let top = counts
        .iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .map(|(label, (count, _))| (label.to_string(), *count));

    CategoricalSummary {
        unique: counts.len(),
        top: top.as_ref().map(|(label, _)| label.clone()),
        freq: top.map(|(_, count)| count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::table;

    fn listings() -> ListingTable {
        table(
            &["price", "condition", "odometer"],
            &[
                &["100", "good", "10"],
                &["200", "fair", ""],
                &["300", "fair", "30"],
                &["400", "good", "40"],
            ],
        )
    }

    #[test]
    fn mixed_describe_has_all_rows_in_column_order() {
        let summary = describe(&listings());
        let labels: Vec<_> = summary.statistics.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );
        let names: Vec<_> = summary.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["price", "condition", "odometer"]);
    }

    #[test]
    fn numeric_statistics() {
        let summary = describe(&listings());
        assert_eq!(summary.cell(Statistic::Count, "price"), Some(SummaryValue::Count(4)));
        assert_eq!(summary.cell(Statistic::Mean, "price"), Some(SummaryValue::Number(250.0)));
        assert_eq!(summary.cell(Statistic::Q25, "price"), Some(SummaryValue::Number(175.0)));
        assert_eq!(summary.cell(Statistic::Median, "price"), Some(SummaryValue::Number(250.0)));
        assert_eq!(summary.cell(Statistic::Max, "price"), Some(SummaryValue::Number(400.0)));
        assert_eq!(summary.cell(Statistic::Count, "odometer"), Some(SummaryValue::Count(3)));
        assert_eq!(summary.cell(Statistic::Top, "price"), None);

        let Some(SummaryValue::Number(std)) = summary.cell(Statistic::Std, "price") else {
            panic!("std missing");
        };
        assert!((std - 129.0994).abs() < 1e-3);
    }

    #[test]
    fn categorical_top_prefers_first_seen_on_ties() {
        let summary = describe(&listings());
        assert_eq!(summary.cell(Statistic::Unique, "condition"), Some(SummaryValue::Count(2)));
        assert_eq!(
            summary.cell(Statistic::Top, "condition"),
            Some(SummaryValue::Text("good".into()))
        );
        assert_eq!(summary.cell(Statistic::Freq, "condition"), Some(SummaryValue::Count(2)));
        assert_eq!(summary.cell(Statistic::Mean, "condition"), None);
    }

    #[test]
    fn empty_view_gives_zero_counts_and_nulls() {
        let view = listings().select(&[]);
        let summary = describe(&view);
        assert_eq!(summary.statistics.len(), 11);
        assert_eq!(summary.columns.len(), 3);
        assert_eq!(summary.cell(Statistic::Count, "price"), Some(SummaryValue::Count(0)));
        assert_eq!(summary.cell(Statistic::Mean, "price"), None);
        assert_eq!(summary.cell(Statistic::Unique, "condition"), Some(SummaryValue::Count(0)));
        assert_eq!(summary.cell(Statistic::Top, "condition"), None);
    }

    #[test]
    fn integer_and_float_spellings_stay_distinct_categories() {
        let summary = describe(&table(&["trim"], &[&["1"], &["1.0"], &["base"], &["1.0"]]));
        assert_eq!(summary.cell(Statistic::Unique, "trim"), Some(SummaryValue::Count(3)));
        assert_eq!(summary.cell(Statistic::Top, "trim"), Some(SummaryValue::Text("1.0".into())));
        assert_eq!(summary.cell(Statistic::Freq, "trim"), Some(SummaryValue::Count(2)));
    }

    #[test]
    fn single_value_has_no_std() {
        let summary = describe(&table(&["price"], &[&["5"]]));
        assert_eq!(summary.cell(Statistic::Std, "price"), None);
        assert_eq!(summary.cell(Statistic::Min, "price"), Some(SummaryValue::Number(5.0)));
        assert!(!summary.statistics.contains(&Statistic::Top));
    }
}
