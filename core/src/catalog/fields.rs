use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default editable field list, looked up in the working directory
pub const FIELD_FILE_NAME: &str = "catalog_fields.txt";

/// Where the JSON catalog takes its column list from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// Fields given directly, e.g. from `--fields`
    Explicit(Vec<String>),

    /// Fields listed one per line in an editable text file
    FromFile(PathBuf),
}

impl FieldSelection {
    /// Builds an explicit selection from a comma-separated list
    ///
    /// Entries are trimmed and empty entries dropped.
    pub fn from_list(list: &str) -> Self {
        FieldSelection::Explicit(
            list.split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Parses a field list, skipping blank lines and `#` comments
pub fn parse_field_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the selected fields from a field list file
///
/// # Errors
///
/// Returns [`CatalogError::FieldList`] if the file cannot be read
pub fn load_selected_fields(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CatalogError::FieldList(format!("{}: {}", path.display(), e)))?;
    Ok(parse_field_list(&contents))
}

/// Renders the editable template listing every discovered key
pub fn render_field_template(keys: &[String]) -> String {
    let mut out = String::new();
    out.push_str("# Edit this list to select which fields to include in the final CSV.\n");
    out.push_str("# Lines starting with # are comments and ignored.\n");
    for key in keys {
        out.push_str(key);
        out.push('\n');
    }
    out
}

/// Writes the field list template to `path`
///
/// # Errors
///
/// Returns [`CatalogError::FieldList`] if the file cannot be written
pub fn write_field_template(keys: &[String], path: &Path) -> Result<()> {
    fs::write(path, render_field_template(keys))
        .map_err(|e| CatalogError::FieldList(format!("{}: {}", path.display(), e)))
}
