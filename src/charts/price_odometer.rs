use std::collections::BTreeMap;

use crate::data::model::{CellValue, ListingTable};
use crate::data::schema::{DatasetSchema, CONDITION, ODOMETER, PRICE};

use super::ChartOutcome;

/// Fixed marker opacity so dense regions stay readable.
pub const POINT_OPACITY: f32 = 0.6;
pub const MISSING_COLUMNS: &str = "Coluna 'odometer' ou 'price' não encontrada no dataset.";

/// Colour group of a scatter series. Ordered ungrouped, then conditions by
/// label, then listings without a condition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScatterGroup {
    /// The dataset has no condition column.
    Ungrouped,
    Condition(String),
    NoCondition,
}

impl ScatterGroup {
    fn of(cell: &CellValue) -> Self {
        match cell {
            CellValue::Null => ScatterGroup::NoCondition,
            value => ScatterGroup::Condition(value.to_string()),
        }
    }

    /// Legend entry; `None` for an ungrouped series.
    pub fn label(&self) -> Option<String> {
        match self {
            ScatterGroup::Ungrouped => None,
            ScatterGroup::Condition(c) => Some(c.clone()),
            ScatterGroup::NoCondition => Some(CellValue::Null.to_string()),
        }
    }
}

/// Points sharing one colour group.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub group: ScatterGroup,
    /// `[odometer, price]` pairs.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceOdometerScatter {
    pub series: Vec<ScatterSeries>,
    pub opacity: f32,
}

impl PriceOdometerScatter {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Price against odometer, one point per listing with both values, grouped
/// by condition when that column exists.
pub fn shape(view: &ListingTable, schema: &DatasetSchema) -> ChartOutcome<PriceOdometerScatter> {
    let (Some(price), Some(odometer)) = (
        schema.index_of(view, PRICE),
        schema.index_of(view, ODOMETER),
    ) else {
        return ChartOutcome::Missing(MISSING_COLUMNS);
    };
    let condition = schema.index_of(view, CONDITION);

    let mut groups: BTreeMap<ScatterGroup, Vec<[f64; 2]>> = BTreeMap::new();
    for row in &view.rows {
        let (Some(y), Some(x)) = (row.cells[price].as_f64(), row.cells[odometer].as_f64()) else {
            continue;
        };
        let group = match condition {
            Some(idx) => ScatterGroup::of(&row.cells[idx]),
            None => ScatterGroup::Ungrouped,
        };
        groups.entry(group).or_default().push([x, y]);
    }

    if groups.is_empty() {
        return ChartOutcome::NoData;
    }
    ChartOutcome::Ready(PriceOdometerScatter {
        series: groups
            .into_iter()
            .map(|(group, points)| ScatterSeries { group, points })
            .collect(),
        opacity: POINT_OPACITY,
    })
}
