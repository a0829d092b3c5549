use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error types for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed element identifier supplied on the command line
    #[error("Invalid tag '{0}': expected gggg,eeee (hexadecimal group and element)")]
    InvalidTag(String),

    /// DICOM reading error
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// JSON sidecar parsing error
    #[error("JSON error: {0}")]
    Json(String),

    /// Field list file could not be read or written
    #[error("Field list error: {0}")]
    FieldList(String),

    /// Directory traversal error
    #[error("Walk error: {0}")]
    Walk(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for CatalogError {
    fn from(e: dicom_object::ReadError) -> Self {
        CatalogError::Dicom(format!("{}", e))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(format!("{}", e))
    }
}

impl From<walkdir::Error> for CatalogError {
    fn from(e: walkdir::Error) -> Self {
        CatalogError::Walk(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tag_message() {
        let err = CatalogError::InvalidTag("0008-0060".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid tag '0008-0060': expected gggg,eeee (hexadecimal group and element)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
