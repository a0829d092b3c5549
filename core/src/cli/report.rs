use crate::api::ScanSummary;
use std::fmt;

/// Text report formatter for a finished scan
pub struct TextReport<'a> {
    summary: &'a ScanSummary,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a ScanSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Summary")?;
        writeln!(f, "============")?;
        writeln!(f, "Files visited:     {}", self.summary.files_visited)?;
        writeln!(f, "DICOM files:       {}", self.summary.dicom_files)?;
        writeln!(f, "Skipped (decode):  {}", self.summary.skipped)?;
        writeln!(f, "Without series:    {}", self.summary.without_series)?;
        writeln!(f, "Duplicate series:  {}", self.summary.duplicate_series)?;
        write!(f, "Rows written:      {}", self.summary.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_format() {
        let summary = ScanSummary {
            files_visited: 10,
            dicom_files: 7,
            skipped: 1,
            without_series: 1,
            duplicate_series: 3,
            rows: 2,
        };

        let output = format!("{}", TextReport::new(&summary));

        assert!(output.starts_with("Scan Summary"));
        assert!(output.contains("Files visited:     10"));
        assert!(output.contains("Skipped (decode):  1"));
        assert!(output.contains("Duplicate series:  3"));
        assert!(output.ends_with("Rows written:      2"));
    }
}
