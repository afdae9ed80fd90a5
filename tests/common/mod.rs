use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use vehicles_dashboard::data::loader::DatasetStore;
use vehicles_dashboard::data::model::ListingTable;
use vehicles_dashboard::data::schema::DatasetSchema;

pub const LISTINGS_CSV: &str = "\
price,model_year,model,condition,odometer,type
9400,2011.0,bmw x5,good,145000.0,SUV
25500,,ford f-150,good,88705.0,pickup
5500,2013.0,hyundai sonata,like new,110000.0,sedan
1500,2003.0,ford f-150,fair,,pickup
14900,2017.0,chrysler 200,excellent,80903.0,sedan
14990,2014.0,chrysler 300,excellent,57954.0,sedan
12990,2015.0,toyota camry,excellent,79212.0,sedan
8990,2012.0,honda pilot,excellent,109473.0,SUV
18990,2012.0,ram 1500,excellent,140742.0,pickup
16500,2018.0,hyundai sonata,excellent,22104.0,sedan
";

/// Keeps the temp file alive alongside the loaded data.
pub struct Fixture {
    _file: NamedTempFile,
    pub store: DatasetStore,
    pub table: Arc<ListingTable>,
    pub schema: DatasetSchema,
}

pub fn load(csv: &str) -> Fixture {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();
    let store = DatasetStore::new(file.path());
    let table = store.load().unwrap();
    let schema = DatasetSchema::detect(&table);
    Fixture {
        _file: file,
        store,
        table,
        schema,
    }
}
