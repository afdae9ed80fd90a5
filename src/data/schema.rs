use super::filter::{condition_options, year_bounds};
use super::model::ListingTable;

pub const MODEL_YEAR: &str = "model_year";
pub const CONDITION: &str = "condition";
pub const PRICE: &str = "price";
pub const ODOMETER: &str = "odometer";
pub const VEHICLE_TYPE: &str = "type";

// ---------------------------------------------------------------------------
// Capability descriptor
// ---------------------------------------------------------------------------

/// Which optional columns the loaded dataset provides, plus the filter
/// controls derived from them. Computed once right after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    pub model_year: bool,
    pub condition: bool,
    pub price: bool,
    pub odometer: bool,
    pub vehicle_type: bool,
    /// Slider bounds; `None` disables the year filter.
    pub year_bounds: Option<(i64, i64)>,
    /// `"all"` followed by the sorted conditions; `None` hides the control.
    pub condition_options: Option<Vec<String>>,
}

impl DatasetSchema {
    pub fn detect(table: &ListingTable) -> Self {
        let has = |name: &str| {
            let present = table.column_index(name).is_some();
            if !present {
                log::info!("Column '{name}' not found in dataset");
            }
            present
        };

        let schema = DatasetSchema {
            model_year: has(MODEL_YEAR),
            condition: has(CONDITION),
            price: has(PRICE),
            odometer: has(ODOMETER),
            vehicle_type: has(VEHICLE_TYPE),
            year_bounds: year_bounds(table),
            condition_options: condition_options(table),
        };
        if schema.year_bounds.is_none() {
            log::info!("Model year filter disabled: no usable '{MODEL_YEAR}' values");
        }
        schema
    }

    /// Index of an optional column, honouring the detected capabilities.
    pub fn index_of(&self, table: &ListingTable, name: &str) -> Option<usize> {
        let present = match name {
            MODEL_YEAR => self.model_year,
            CONDITION => self.condition,
            PRICE => self.price,
            ODOMETER => self.odometer,
            VEHICLE_TYPE => self.vehicle_type,
            _ => true,
        };
        if present {
            table.column_index(name)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::table;

    #[test]
    fn detects_present_and_missing_columns() {
        let t = table(
            &["price", "model_year", "condition"],
            &[&["100", "2010", "good"], &["200", "2012", "fair"]],
        );
        let schema = DatasetSchema::detect(&t);
        assert!(schema.price && schema.model_year && schema.condition);
        assert!(!schema.odometer && !schema.vehicle_type);
        assert_eq!(schema.year_bounds, Some((2010, 2012)));
        assert_eq!(
            schema.condition_options,
            Some(vec!["all".to_string(), "fair".into(), "good".into()])
        );
        assert_eq!(schema.index_of(&t, VEHICLE_TYPE), None);
        assert_eq!(schema.index_of(&t, MODEL_YEAR), Some(1));
    }

    #[test]
    fn all_null_years_disable_the_year_filter() {
        let t = table(&["model_year"], &[&[""], &[""]]);
        let schema = DatasetSchema::detect(&t);
        assert!(schema.model_year);
        assert_eq!(schema.year_bounds, None);
        assert_eq!(schema.condition_options, None);
    }
}
