//! Catalog assembly and CSV output
//!
//! - [`CsvTable`]: header plus ordered rows, written as CSV
//! - [`datasets`]: the JSON sidecar catalog
//! - [`fields`]: field selection for the JSON catalog

pub mod csv;
pub mod datasets;
pub mod fields;

pub use csv::{escape_csv, CsvTable};
pub use datasets::{
    catalog_datasets, find_json_files, DatasetCatalogConfig, DatasetRun,
    DATASET_CATALOG_FILENAME,
};
pub use fields::{FieldSelection, FIELD_FILE_NAME};
