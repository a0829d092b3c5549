use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Escape a value for CSV output
///
/// Values containing a comma, quote or line break are quoted, with inner
/// quotes doubled. Everything else is written verbatim.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// A header plus rows of plain-text cells, written as CSV
///
/// Rows keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the header and all rows, each line terminated by `\n`
    pub fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write_line(out, &self.header)?;
        for row in &self.rows {
            write_line(out, row)?;
        }
        Ok(())
    }

    /// Writes the table to `path`, replacing any existing file
    ///
    /// The whole table is rendered in memory first and written in one call.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        std::fs::write(path, buf)?;
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String]) -> std::io::Result<()> {
    let line = cells
        .iter()
        .map(|cell| escape_csv(cell))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(out, "{}", line)
}
