//! Catalog of JSON sidecar files
//!
//! Every `.json` file under a directory is flattened into one CSV row with a
//! `Path` column, one column per selected top-level field, and an `Error`
//! column for files that could not be parsed.

use crate::error::{CatalogError, Result};
use crate::scan::collect_files_with_extension;
use log::debug;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::csv::CsvTable;
use super::fields::{load_selected_fields, write_field_template, FieldSelection};

/// Default catalog file name, written to the output directory
pub const DATASET_CATALOG_FILENAME: &str = "dcm_qa_catalog.csv";

/// Settings for one JSON catalog run
#[derive(Debug, Clone)]
pub struct DatasetCatalogConfig {
    /// Source of the column list
    pub selection: FieldSelection,

    /// Directory the catalog is written to
    pub output_dir: PathBuf,
}

impl DatasetCatalogConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(DATASET_CATALOG_FILENAME)
    }
}

/// Result of a JSON catalog run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetRun {
    /// No field list existed yet; a template was written for editing
    TemplateWritten { path: PathBuf, keys: usize },

    /// The catalog was written
    CatalogWritten {
        path: PathBuf,
        fields: Vec<String>,
        records: usize,
    },
}

/// One flattened JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRecord {
    pub path: PathBuf,
    pub values: Vec<String>,
    pub error: Option<String>,
}

/// Recursively finds `.json` files, sorted by path
pub fn find_json_files(root: &Path) -> Vec<PathBuf> {
    collect_files_with_extension(root, &["json"])
}

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let contents = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&contents)? {
        Value::Object(map) => Ok(map),
        _ => Err(CatalogError::Json("top-level value is not an object".to_string())),
    }
}

/// Sorted union of the top-level keys of all readable JSON objects
pub fn collect_all_keys(files: &[PathBuf]) -> Vec<String> {
    let mut keys = BTreeSet::new();
    for path in files {
        match read_object(path) {
            Ok(map) => keys.extend(map.into_iter().map(|(k, _)| k)),
            Err(e) => debug!("Ignoring {} while collecting keys: {}", path.display(), e),
        }
    }
    keys.into_iter().collect()
}

/// Renders a JSON value as a catalog cell
///
/// Strings are written without quotes and null as an empty cell; other
/// values use their compact JSON form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Flattens one JSON file into the selected fields
///
/// Missing fields are empty. A file that cannot be read or parsed yields
/// empty fields and an error message.
pub fn extract_record(path: &Path, fields: &[String]) -> DatasetRecord {
    match read_object(path) {
        Ok(map) => DatasetRecord {
            path: path.to_path_buf(),
            values: fields
                .iter()
                .map(|f| map.get(f).map(render_value).unwrap_or_default())
                .collect(),
            error: None,
        },
        Err(e) => DatasetRecord {
            path: path.to_path_buf(),
            values: vec![String::new(); fields.len()],
            error: Some(e.to_string()),
        },
    }
}

/// Builds the `Path, <fields...>, Error` table
pub fn build_table(records: &[DatasetRecord], fields: &[String]) -> CsvTable {
    let mut header = Vec::with_capacity(fields.len() + 2);
    header.push("Path".to_string());
    header.extend(fields.iter().cloned());
    header.push("Error".to_string());

    let mut table = CsvTable::new(header);
    for record in records {
        let mut row = Vec::with_capacity(fields.len() + 2);
        row.push(record.path.display().to_string());
        row.extend(record.values.iter().cloned());
        row.push(record.error.clone().unwrap_or_default());
        table.push_row(row);
    }
    table
}

/// Catalogs the JSON files listed in `files` according to `config`
///
/// When the selection names a field list file that does not exist, a
/// template with every discovered key is written instead and no catalog is
/// produced.
pub fn catalog_datasets(config: &DatasetCatalogConfig, files: &[PathBuf]) -> Result<DatasetRun> {
    let fields = match &config.selection {
        FieldSelection::Explicit(fields) => fields.clone(),
        FieldSelection::FromFile(path) if !path.exists() => {
            let keys = collect_all_keys(files);
            write_field_template(&keys, path)?;
            return Ok(DatasetRun::TemplateWritten {
                path: path.clone(),
                keys: keys.len(),
            });
        }
        FieldSelection::FromFile(path) => load_selected_fields(path)?,
    };

    let records: Vec<DatasetRecord> = files
        .iter()
        .map(|path| extract_record(path, &fields))
        .collect();

    let output = config.output_path();
    build_table(&records, &fields).write_to_file(&output)?;

    Ok(DatasetRun::CatalogWritten {
        path: output,
        fields,
        records: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("SIEMENS")), "SIEMENS");
        assert_eq!(render_value(&json!(null)), "");
        assert_eq!(render_value(&json!(0.0025)), "0.0025");
        assert_eq!(render_value(&json!(3)), "3");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_extract_record_missing_field_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, r#"{"Modality": "MR", "EchoTime": 0.03}"#).unwrap();

        let fields = vec![
            "Modality".to_string(),
            "EchoTime".to_string(),
            "Manufacturer".to_string(),
        ];
        let record = extract_record(&path, &fields);

        assert_eq!(record.values, vec!["MR", "0.03", ""]);
        assert_eq!(record.error, None);
    }

    #[test]
    fn test_extract_record_reports_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let record = extract_record(&path, &["Modality".to_string()]);

        assert_eq!(record.values, vec![""]);
        assert!(record.error.unwrap().starts_with("JSON error"));
    }

    #[test]
    fn test_collect_all_keys_sorted_union() {
        let dir = tempfile::TempDir::new().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let c = dir.path().join("c.json");
        fs::write(&a, r#"{"Modality": "MR", "EchoTime": 1}"#).unwrap();
        fs::write(&b, r#"{"Manufacturer": "GE", "Modality": "CT"}"#).unwrap();
        fs::write(&c, "[1, 2, 3]").unwrap();

        let keys = collect_all_keys(&[a, b, c]);
        assert_eq!(keys, vec!["EchoTime", "Manufacturer", "Modality"]);
    }

    #[test]
    fn test_build_table_layout() {
        let records = vec![DatasetRecord {
            path: PathBuf::from("/data/sub/a.json"),
            values: vec!["MR".to_string()],
            error: None,
        }];
        let table = build_table(&records, &["Modality".to_string()]);

        assert_eq!(table.header(), ["Path", "Modality", "Error"]);
        assert_eq!(table.rows()[0], vec!["/data/sub/a.json", "MR", ""]);
    }
}
