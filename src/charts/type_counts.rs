use std::collections::HashMap;

use crate::data::model::ListingTable;
use crate::data::schema::{DatasetSchema, VEHICLE_TYPE};

use super::ChartOutcome;

pub const LABEL_COLUMN: &str = "Tipo";
pub const COUNT_COLUMN: &str = "Quantidade";
pub const MISSING_TYPE: &str = "Coluna 'type' não encontrada no dataset.";

/// Listing count per vehicle type, most common first.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCounts {
    pub rows: Vec<(String, usize)>,
}

impl TypeCounts {
    pub fn column_labels(&self) -> [&'static str; 2] {
        [LABEL_COLUMN, COUNT_COLUMN]
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, n)| n).sum()
    }
}

/// Count listings per distinct non-null `type`. Ties are ordered by label.
pub fn shape(view: &ListingTable, schema: &DatasetSchema) -> ChartOutcome<TypeCounts> {
    let Some(idx) = schema.index_of(view, VEHICLE_TYPE) else {
        return ChartOutcome::Missing(MISSING_TYPE);
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    for cell in view.column_values(idx).filter(|v| !v.is_null()) {
        *counts.entry(cell.to_string()).or_default() += 1;
    }
    if counts.is_empty() {
        return ChartOutcome::NoData;
    }

    let mut rows: Vec<(String, usize)> = counts.into_iter().collect();
    rows.sort_by(|(la, ca), (lb, cb)| cb.cmp(ca).then_with(|| la.cmp(lb)));
    ChartOutcome::Ready(TypeCounts { rows })
}
