//! Series-level selection of candidate files
//!
//! Reduces a stream of decoded DICOM files to one representative per series.

mod series;

pub use series::SeriesDeduplicator;
