use crate::catalog::CsvTable;
use crate::error::{CatalogError, Result};
use crate::extraction::{locate, tag_keyword, DecodedContainer};
use crate::scan::{is_dicom_file, walk_files};
use crate::selection::SeriesDeduplicator;
use crate::types::TagSpec;
use log::{debug, info, trace, warn};
use std::path::{Path, PathBuf};

/// Default catalog file name, written to the working directory
pub const DICOM_CATALOG_FILENAME: &str = "catalog_dicoms.csv";

/// Settings for one DICOM catalog run
#[derive(Debug, Clone)]
pub struct DicomCatalogConfig {
    /// Directory tree to scan
    pub root: PathBuf,

    /// Element to extract from each series
    pub tag: TagSpec,

    /// Where the catalog is written
    pub output: PathBuf,
}

impl DicomCatalogConfig {
    /// Creates a config writing to [`DICOM_CATALOG_FILENAME`] in the working directory
    pub fn new(root: impl Into<PathBuf>, tag: TagSpec) -> Self {
        Self {
            root: root.into(),
            tag,
            output: PathBuf::from(DICOM_CATALOG_FILENAME),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// One line of the DICOM catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    /// File name without its directory
    pub filename: String,

    /// Extracted element value as plain text (empty when absent)
    pub value: String,
}

/// What happened to a single file during a scan
#[derive(Debug)]
pub enum FileOutcome {
    /// No DICOM marker, or the file could not be read
    NotDicom,

    /// DICOM marker present but the header could not be decoded
    Skipped(CatalogError),

    /// Decoded, but no usable Series Instance UID
    NoSeries,

    /// Another file of this series was already cataloged
    DuplicateSeries(String),

    /// First file seen for its series; a row was recorded
    Admitted(CatalogRow),
}

/// Per-outcome counters for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_visited: usize,
    pub dicom_files: usize,
    pub skipped: usize,
    pub without_series: usize,
    pub duplicate_series: usize,
    pub rows: usize,
}

impl ScanSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.files_visited += 1;
        match outcome {
            FileOutcome::NotDicom => {}
            FileOutcome::Skipped(_) => {
                self.dicom_files += 1;
                self.skipped += 1;
            }
            FileOutcome::NoSeries => {
                self.dicom_files += 1;
                self.without_series += 1;
            }
            FileOutcome::DuplicateSeries(_) => {
                self.dicom_files += 1;
                self.duplicate_series += 1;
            }
            FileOutcome::Admitted(_) => {
                self.dicom_files += 1;
                self.rows += 1;
            }
        }
    }
}

/// Builds a one-row-per-series catalog of a single DICOM element
///
/// Files are processed one at a time; each is sniffed, partially decoded,
/// checked against the series already seen, and only then has the
/// requested element looked up.
///
/// # Example
///
/// ```
/// use dcmcatalog_core::{DicomCataloger, TagSpec};
///
/// let spec = TagSpec::parse("0008,0060").unwrap();
/// let cataloger = DicomCataloger::new(spec);
///
/// let table = cataloger.into_table();
/// assert_eq!(table.header(), ["Filename", "Tag 0008,0060"]);
/// assert!(table.is_empty());
/// ```
#[derive(Debug)]
pub struct DicomCataloger {
    spec: TagSpec,
    series: SeriesDeduplicator,
    rows: Vec<CatalogRow>,
    summary: ScanSummary,
}

impl DicomCataloger {
    pub fn new(spec: TagSpec) -> Self {
        Self {
            spec,
            series: SeriesDeduplicator::new(),
            rows: Vec::new(),
            summary: ScanSummary::default(),
        }
    }

    /// Processes every regular file under `root`, in walk order
    ///
    /// Decode failures are logged as warnings and never stop the scan.
    pub fn scan(&mut self, root: &Path) {
        walk_files(root, |path| {
            let outcome = self.process_file(path);
            match &outcome {
                FileOutcome::NotDicom => trace!("Not DICOM: {}", path.display()),
                FileOutcome::Skipped(err) => warn!("Skipping {}: {}", path.display(), err),
                FileOutcome::NoSeries => debug!("No SeriesInstanceUID: {}", path.display()),
                FileOutcome::DuplicateSeries(uid) => {
                    debug!("Series {} already cataloged: {}", uid, path.display())
                }
                FileOutcome::Admitted(row) => debug!("Cataloged {}: {}", row.filename, row.value),
            }
        });
    }

    /// Runs a single file through sniffing, decoding and deduplication
    ///
    /// Admitted rows are kept in the cataloger; the outcome is returned
    /// for reporting.
    pub fn process_file(&mut self, path: &Path) -> FileOutcome {
        let outcome = self.classify(path);
        if let FileOutcome::Admitted(row) = &outcome {
            self.rows.push(row.clone());
        }
        self.summary.record(&outcome);
        outcome
    }

    fn classify(&mut self, path: &Path) -> FileOutcome {
        if !is_dicom_file(path) {
            return FileOutcome::NotDicom;
        }

        let container = match DecodedContainer::open(path) {
            Ok(container) => container,
            Err(err) => return FileOutcome::Skipped(err),
        };

        let series_uid = match container.series_instance_uid() {
            Some(uid) => uid,
            None => return FileOutcome::NoSeries,
        };
        if !self.series.admit(Some(series_uid)) {
            return FileOutcome::DuplicateSeries(series_uid.to_string());
        }

        FileOutcome::Admitted(CatalogRow {
            filename: file_name(path),
            value: locate(&container, &self.spec).to_cell(),
        })
    }

    pub fn spec(&self) -> &TagSpec {
        &self.spec
    }

    /// Rows admitted so far, in admission order
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Converts the admitted rows into a `Filename`, `Tag gggg,eeee` table
    pub fn into_table(self) -> CsvTable {
        let mut table = CsvTable::new(vec!["Filename".to_string(), self.spec.column_name()]);
        for row in self.rows {
            table.push_row(vec![row.filename, row.value]);
        }
        table
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Scans `config.root` and writes the catalog to `config.output`
///
/// The catalog is written once, after the whole tree has been processed.
///
/// # Errors
///
/// Returns an error only if the catalog file cannot be written
pub fn catalog_dicoms(config: &DicomCatalogConfig) -> Result<ScanSummary> {
    match tag_keyword(config.tag.tag()) {
        Some(keyword) => info!("Cataloging tag {} ({})", config.tag, keyword),
        None => info!("Cataloging tag {}", config.tag),
    }
    info!("Scanning: {}", config.root.display());

    let mut cataloger = DicomCataloger::new(config.tag.clone());
    cataloger.scan(&config.root);
    let summary = cataloger.summary();

    let table = cataloger.into_table();
    if table.is_empty() {
        info!("No series found under {}", config.root.display());
    }
    table.write_to_file(&config.output)?;
    info!(
        "Catalog of {} series written to: {}",
        table.len(),
        config.output.display()
    );

    Ok(summary)
}
