use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::DataAccessError;

use super::model::{CellValue, Listing, ListingTable};

// ---------------------------------------------------------------------------
// Memoized store
// ---------------------------------------------------------------------------

/// Loads the dataset once and hands out the same table for the rest of the
/// process lifetime.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    table: OnceLock<Arc<ListingTable>>,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached table, reading the CSV on first use.
    /// A failed read is not cached.
    pub fn load(&self) -> Result<Arc<ListingTable>, DataAccessError> {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(load_csv(&self.path)?);
        Ok(Arc::clone(self.table.get_or_init(|| table)))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one listing per record.
/// Cell types are inferred per field; empty fields are nulls.
pub fn load_csv(path: &Path) -> Result<ListingTable, DataAccessError> {
    let file = File::open(path).map_err(|source| DataAccessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| DataAccessError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(DataAccessError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        rows.push(Listing {
            cells: record.iter().map(CellValue::parse).collect(),
        });
    }

    let table = ListingTable::from_rows(headers, rows);
    log::info!(
        "Loaded {} listings with columns {:?} from {}",
        table.len(),
        table.column_names().collect::<Vec<_>>(),
        path.display()
    );
    Ok(table)
}
