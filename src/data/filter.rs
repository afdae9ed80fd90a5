use std::collections::BTreeSet;
use std::fmt;

use super::model::{CellValue, ListingTable};
use super::schema::{DatasetSchema, CONDITION, MODEL_YEAR};

/// Sentinel option meaning "no condition constraint".
pub const ALL_CONDITIONS: &str = "all";

// ---------------------------------------------------------------------------
// Filter selection: what the sidebar widgets currently say
// ---------------------------------------------------------------------------

/// Condition dropdown value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConditionChoice {
    #[default]
    All,
    Only(String),
}

impl ConditionChoice {
    /// Map a dropdown option back to a choice; `"all"` is the sentinel.
    pub fn from_option(option: &str) -> Self {
        if option == ALL_CONDITIONS {
            ConditionChoice::All
        } else {
            ConditionChoice::Only(option.to_string())
        }
    }

    pub fn as_option(&self) -> &str {
        match self {
            ConditionChoice::All => ALL_CONDITIONS,
            ConditionChoice::Only(c) => c,
        }
    }
}

impl fmt::Display for ConditionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option())
    }
}

/// Filter state for one dashboard run. Rebuilt from the widgets on every
/// interaction and never stored beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Inclusive `model_year` range; `None` means unconstrained.
    pub year_range: Option<(i64, i64)>,
    pub condition: ConditionChoice,
}

impl FilterSelection {
    /// Selection the widgets start with: full year range, every condition.
    pub fn initial(schema: &DatasetSchema) -> Self {
        FilterSelection {
            year_range: schema.year_bounds,
            condition: ConditionChoice::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Control options derived from the loaded table
// ---------------------------------------------------------------------------

/// Observed `(min, max)` of the non-null `model_year` values, truncated to
/// whole years. `None` if the column is absent or has no numeric value.
pub fn year_bounds(table: &ListingTable) -> Option<(i64, i64)> {
    let idx = table.column_index(MODEL_YEAR)?;
    table
        .column_values(idx)
        .filter_map(CellValue::as_f64)
        .fold(None, |acc, year| match acc {
            None => Some((year, year)),
            Some((lo, hi)) => Some((f64::min(lo, year), f64::max(hi, year))),
        })
        .map(|(lo, hi)| (lo as i64, hi as i64))
}

/// Dropdown options: the sentinel followed by the distinct non-null
/// conditions in ascending order. `None` if the column is absent.
pub fn condition_options(table: &ListingTable) -> Option<Vec<String>> {
    let idx = table.column_index(CONDITION)?;
    let distinct: BTreeSet<&CellValue> = table
        .column_values(idx)
        .filter(|v| !v.is_null())
        .collect();

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(ALL_CONDITIONS.to_string());
    options.extend(distinct.into_iter().map(|v| v.to_string()));
    Some(options)
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Return indices of listings that pass all active filters.
///
/// A listing passes when:
/// * the year range is unset, the column is absent, or its `model_year` is
///   numeric and within the inclusive range (nulls fail)
/// * the condition is `All`, the column is absent, or its `condition`
///   matches exactly
pub fn filtered_indices(
    table: &ListingTable,
    schema: &DatasetSchema,
    selection: &FilterSelection,
) -> Vec<usize> {
    let year = selection
        .year_range
        .and_then(|range| Some((schema.index_of(table, MODEL_YEAR)?, range)));
    let condition = match &selection.condition {
        ConditionChoice::All => None,
        ConditionChoice::Only(wanted) => schema
            .index_of(table, CONDITION)
            .map(|idx| (idx, wanted.as_str())),
    };

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            if let Some((idx, (min, max))) = year {
                match row.cells[idx].as_f64() {
                    Some(y) if y >= min as f64 && y <= max as f64 => {}
                    _ => return false,
                }
            }
            if let Some((idx, wanted)) = condition {
                let cell = &row.cells[idx];
                if cell.is_null() || cell.to_string() != wanted {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

/// Produce the filtered view as a new table; `table` is left untouched.
pub fn apply(
    table: &ListingTable,
    schema: &DatasetSchema,
    selection: &FilterSelection,
) -> ListingTable {
    let indices = filtered_indices(table, schema, selection);
    log::debug!(
        "Filter {:?} kept {} of {} listings",
        selection,
        indices.len(),
        table.len()
    );
    table.select(&indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::table;

    fn years() -> ListingTable {
        table(
            &["model_year", "condition"],
            &[&["2010", "good"], &["2015", "fair"], &["2020", "good"]],
        )
    }

    fn select(year_range: Option<(i64, i64)>, condition: &str) -> FilterSelection {
        FilterSelection {
            year_range,
            condition: ConditionChoice::from_option(condition),
        }
    }

    #[test]
    fn year_range_is_inclusive() {
        let t = years();
        let schema = DatasetSchema::detect(&t);
        let view = apply(&t, &schema, &select(Some((2015, 2020)), "all"));
        assert_eq!(view.rows, t.rows[1..].to_vec());
    }

    #[test]
    fn narrowing_the_range_never_grows_the_view() {
        let t = years();
        let schema = DatasetSchema::detect(&t);
        let mut last = usize::MAX;
        for (lo, hi) in [(2010, 2020), (2011, 2020), (2015, 2019), (2016, 2019)] {
            let n = filtered_indices(&t, &schema, &select(Some((lo, hi)), "all")).len();
            assert!(n <= last);
            last = n;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn condition_matches_exactly() {
        let t = table(&["condition"], &[&["good"], &["fair"], &["good"]]);
        let schema = DatasetSchema::detect(&t);
        assert_eq!(
            filtered_indices(&t, &schema, &select(None, "good")),
            vec![0, 2]
        );
        assert_eq!(filtered_indices(&t, &schema, &select(None, "all")).len(), 3);
    }

    #[test]
    fn null_years_are_excluded_by_an_active_range() {
        let t = table(&["model_year"], &[&["2012"], &[""], &["2013.0"]]);
        let schema = DatasetSchema::detect(&t);
        assert_eq!(
            filtered_indices(&t, &schema, &select(Some((2000, 2030)), "all")),
            vec![0, 2]
        );
        assert_eq!(
            filtered_indices(&t, &schema, &select(None, "all")),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn predicates_on_absent_columns_are_noops() {
        let t = table(&["price"], &[&["1"], &["2"]]);
        let schema = DatasetSchema::detect(&t);
        let view = apply(&t, &schema, &select(Some((2015, 2016)), "good"));
        assert_eq!(view, t);
    }

    #[test]
    fn predicates_compose_with_and() {
        let t = years();
        let schema = DatasetSchema::detect(&t);
        assert_eq!(
            filtered_indices(&t, &schema, &select(Some((2012, 2020)), "good")),
            vec![2]
        );
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let t = years();
        let schema = DatasetSchema::detect(&t);
        let selection = select(Some((2011, 2020)), "good");
        let once = apply(&t, &schema, &selection);
        let twice = apply(&once, &schema, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn condition_options_start_with_sentinel() {
        let t = table(&["condition"], &[&["salvage"], &[""], &["excellent"], &["salvage"]]);
        assert_eq!(
            condition_options(&t),
            Some(vec!["all".into(), "excellent".into(), "salvage".into()])
        );
    }

    #[test]
    fn year_bounds_truncate_float_years() {
        let t = table(&["model_year"], &[&["2011.0"], &["1908.0"], &[""]]);
        assert_eq!(year_bounds(&t), Some((1908, 2011)));
        assert_eq!(year_bounds(&table(&["price"], &[&["1"]])), None);
    }
}
