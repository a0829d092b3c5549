use std::fmt;

/// Decoded value of a single data element
///
/// Values are reduced to a small set of kinds when the file is decoded so
/// that lookups never touch the underlying DICOM object again.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// Textual value as stored, padding removed (multiple values joined by `\`)
    Text(String),
    /// Integer value(s) from binary integer VRs
    Int(Vec<i64>),
    /// Floating point value(s) from FL and FD
    Float(Vec<f64>),
    /// Sequence with the given number of items
    Sequence(usize),
    /// Opaque binary value with the given byte length
    Bytes(usize),
    /// Element not present in the consulted block
    Absent,
}

impl ElementValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, ElementValue::Absent)
    }

    /// Returns the text if this is a non-empty textual value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ElementValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Plain-text rendering used for catalog cells
    pub fn to_cell(&self) -> String {
        self.to_string()
    }
}

fn write_multi<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, "\\")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementValue::Text(s) => write!(f, "{}", s),
            ElementValue::Int(values) => write_multi(f, values),
            ElementValue::Float(values) => write_multi(f, values),
            ElementValue::Sequence(n) => write!(f, "<sequence of {} items>", n),
            ElementValue::Bytes(n) => write!(f, "<{} bytes>", n),
            ElementValue::Absent => Ok(()),
        }
    }
}
