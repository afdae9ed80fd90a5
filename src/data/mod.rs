//! Data layer: core types, loading, schema detection, filtering and summaries.
//!
//! Architecture:
//! ```text
//!   vehicles_us.csv
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ DatasetStore  │  parse once → Arc<ListingTable>
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ DatasetSchema │  optional columns, year bounds, condition options
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterSelection → filtered copy of the table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ summary   │  describe() over the filtered view
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
pub mod summary;
