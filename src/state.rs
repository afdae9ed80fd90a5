use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::dashboard::DashboardView;
use crate::data::filter::{ConditionChoice, FilterSelection};
use crate::data::loader::DatasetStore;
use crate::data::model::ListingTable;
use crate::data::schema::DatasetSchema;

// ---------------------------------------------------------------------------
// Loaded dataset
// ---------------------------------------------------------------------------

/// The cached table plus everything derived from it once at load time.
pub struct LoadedData {
    pub table: Arc<ListingTable>,
    pub schema: DatasetSchema,
    pub color_map: ColorMap,
    /// Pipeline output for `view.selection`.
    pub view: DashboardView,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// `Ok` once the dataset is loaded, `Err` with the fatal message otherwise.
    pub data: Result<LoadedData, String>,

    /// Year slider handles; ignored when the schema has no year bounds.
    pub year_range: Option<(i64, i64)>,

    /// Condition dropdown.
    pub condition: ConditionChoice,

    /// "Show raw data" checkbox.
    pub show_raw_data: bool,
}

impl AppState {
    /// Load the dataset through `store` and run the pipeline once with the
    /// initial selection. A load failure is kept as the page's error.
    pub fn load(config: DashboardConfig, store: &DatasetStore) -> Self {
        let data = match store.load() {
            Ok(table) => Ok(Self::prepare(table, config.histogram_bins)),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                Err(format!("Erro ao carregar os dados: {e}"))
            }
        };
        let year_range = data.as_ref().ok().and_then(|d| d.schema.year_bounds);

        Self {
            config,
            data,
            year_range,
            condition: ConditionChoice::All,
            show_raw_data: false,
        }
    }

    fn prepare(table: Arc<ListingTable>, histogram_bins: usize) -> LoadedData {
        let schema = DatasetSchema::detect(&table);
        let color_map = ColorMap::for_conditions(&schema);
        let view = DashboardView::compute(
            &table,
            &schema,
            &FilterSelection::initial(&schema),
            histogram_bins,
        );
        LoadedData {
            table,
            schema,
            color_map,
            view,
        }
    }

    /// The selection the widgets currently describe.
    pub fn selection(&self) -> FilterSelection {
        let year_enabled = self
            .data
            .as_ref()
            .is_ok_and(|d| d.schema.year_bounds.is_some());
        FilterSelection {
            year_range: self.year_range.filter(|_| year_enabled),
            condition: self.condition.clone(),
        }
    }

    /// Re-run the pipeline if the widgets changed since the last run.
    pub fn refresh(&mut self) {
        let selection = self.selection();
        let bins = self.config.histogram_bins;
        if let Ok(data) = &mut self.data {
            if data.view.selection != selection {
                data.view = DashboardView::compute(&data.table, &data.schema, &selection, bins);
            }
        }
    }

    /// Move the lower year handle, pushing the upper one along if needed.
    pub fn set_year_min(&mut self, year: i64) {
        if let Some((min, max)) = &mut self.year_range {
            *min = year;
            if *max < year {
                *max = year;
            }
        }
    }

    /// Move the upper year handle, pushing the lower one along if needed.
    pub fn set_year_max(&mut self, year: i64) {
        if let Some((min, max)) = &mut self.year_range {
            *max = year;
            if *min > year {
                *min = year;
            }
        }
    }

    pub fn set_condition(&mut self, option: &str) {
        self.condition = ConditionChoice::from_option(option);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn state_for(csv: &str) -> (AppState, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();
        let store = DatasetStore::new(file.path());
        (AppState::load(DashboardConfig::default(), &store), file)
    }

    #[test]
    fn starts_unfiltered() {
        let (state, _file) = state_for("model_year,condition\n2010,good\n2020,fair\n");
        assert_eq!(state.year_range, Some((2010, 2020)));
        let data = state.data.as_ref().unwrap();
        assert_eq!(data.view.filtered.len(), 2);
    }

    #[test]
    fn refresh_follows_widget_changes() {
        let (mut state, _file) =
            state_for("model_year,condition\n2010,good\n2015,fair\n2020,good\n");
        state.set_year_min(2015);
        state.refresh();
        assert_eq!(state.data.as_ref().unwrap().view.filtered.len(), 2);

        state.set_condition("good");
        state.refresh();
        let data = state.data.as_ref().unwrap();
        assert_eq!(data.view.filtered.len(), 1);
        assert_eq!(data.table.len(), 3);
    }

    #[test]
    fn year_handles_stay_ordered() {
        let (mut state, _file) = state_for("model_year\n2000\n2010\n");
        state.set_year_max(2004);
        state.set_year_min(2008);
        assert_eq!(state.year_range, Some((2008, 2008)));
        state.set_year_max(2001);
        assert_eq!(state.year_range, Some((2001, 2001)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("vehicles_us.csv"));
        let state = AppState::load(DashboardConfig::default(), &store);
        assert!(state.data.is_err());
        assert_eq!(state.selection(), FilterSelection::default());
    }
}
