use crate::error::{CatalogError, Result};
use dicom_core::Tag;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Group number reserved for the file meta information block
pub const FILE_META_GROUP: u16 = 0x0002;

/// Element identifier requested by the caller
///
/// Keeps the parsed [`Tag`] together with the exact text it was parsed
/// from, since the catalog header echoes the caller's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    tag: Tag,
    text: String,
}

impl TagSpec {
    /// Parses an identifier of the form `gggg,eeee`
    ///
    /// Both halves must be exactly four hexadecimal digits (either case).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidTag`] for anything else
    pub fn parse(s: &str) -> Result<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^([0-9A-Fa-f]{4}),([0-9A-Fa-f]{4})$").expect("Failed to compile regex")
        });

        let caps = re
            .captures(s)
            .ok_or_else(|| CatalogError::InvalidTag(s.to_string()))?;

        let group = u16::from_str_radix(&caps[1], 16)
            .map_err(|_| CatalogError::InvalidTag(s.to_string()))?;
        let element = u16::from_str_radix(&caps[2], 16)
            .map_err(|_| CatalogError::InvalidTag(s.to_string()))?;

        Ok(Self {
            tag: Tag(group, element),
            text: s.to_string(),
        })
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The identifier exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this identifier addresses the file meta information block
    pub fn is_file_meta(&self) -> bool {
        self.tag.group() == FILE_META_GROUP
    }

    /// Header label for the value column, e.g. `Tag 0008,0060`
    pub fn column_name(&self) -> String {
        format!("Tag {}", self.text)
    }
}

impl FromStr for TagSpec {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
