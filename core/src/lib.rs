pub mod api;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod scan;
pub mod selection;
pub mod types;

pub use api::{
    catalog_dicoms, CatalogRow, DicomCatalogConfig, DicomCataloger, FileOutcome, ScanSummary,
    DICOM_CATALOG_FILENAME,
};
pub use catalog::{
    catalog_datasets, find_json_files, CsvTable, DatasetCatalogConfig, DatasetRun,
    FieldSelection, DATASET_CATALOG_FILENAME, FIELD_FILE_NAME,
};
pub use cli::report::TextReport;
pub use error::{CatalogError, Result};
pub use extraction::{locate, DecodedContainer};
pub use scan::{has_dicom_marker, is_dicom_file};
pub use selection::SeriesDeduplicator;
pub use types::*;
