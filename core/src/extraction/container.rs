//! Partial decoding of DICOM files into flat element maps
//!
//! A [`DecodedContainer`] is produced once per file and holds two disjoint
//! maps: one for the file meta information group (0002) and one for the
//! main data set. Pixel data is never read.

use crate::error::Result;
use crate::types::ElementValue;
use dicom_core::header::{HasLength, Header};
use dicom_core::{DataElement, Tag, VR};
use dicom_object::file::{OpenFileOptions, ReadPreamble};
use dicom_object::{FileDicomObject, FileMetaTable, InMemDicomObject};
use std::collections::BTreeMap;
use std::path::Path;

use super::tags::{PIXEL_DATA, SERIES_INSTANCE_UID};

/// Element values of one DICOM file, without pixel data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedContainer {
    file_meta: BTreeMap<Tag, ElementValue>,
    main: BTreeMap<Tag, ElementValue>,
}

impl DecodedContainer {
    /// Opens and decodes a DICOM file, stopping before Pixel Data
    ///
    /// The file must start with the 128-byte preamble and `DICM` marker.
    /// The file handle is released before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file meta group or the data set cannot be parsed
    pub fn open(path: &Path) -> Result<Self> {
        let dcm = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Always)
            .read_until(PIXEL_DATA)
            .open_file(path)?;
        Ok(Self::from_object(&dcm))
    }

    /// Decodes an already-opened DICOM file object
    pub fn from_object(dcm: &FileDicomObject<InMemDicomObject>) -> Self {
        Self {
            file_meta: decode_file_meta(dcm.meta()),
            main: decode_data_set(dcm),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        file_meta: BTreeMap<Tag, ElementValue>,
        main: BTreeMap<Tag, ElementValue>,
    ) -> Self {
        Self { file_meta, main }
    }

    /// File meta information block (group 0002)
    pub fn file_meta(&self) -> &BTreeMap<Tag, ElementValue> {
        &self.file_meta
    }

    /// Main data set
    pub fn main(&self) -> &BTreeMap<Tag, ElementValue> {
        &self.main
    }

    /// Series Instance UID from the main data set, if present and non-empty
    pub fn series_instance_uid(&self) -> Option<&str> {
        self.main
            .get(&SERIES_INSTANCE_UID)
            .and_then(|value| value.as_text())
    }
}

/// Flattens the file meta table into an element map
///
/// Every attribute present in the parsed table is included, through the
/// same value path as the main data set.
fn decode_file_meta(meta: &FileMetaTable) -> BTreeMap<Tag, ElementValue> {
    meta.to_element_iter()
        .map(|elem| (elem.tag(), decode_element(&elem)))
        .collect()
}

/// Flattens the top level of the main data set into an element map
fn decode_data_set(dcm: &InMemDicomObject) -> BTreeMap<Tag, ElementValue> {
    dcm.iter()
        .map(|elem| (elem.tag(), decode_element(elem)))
        .collect()
}

/// Reduces a single element to an [`ElementValue`]
///
/// Textual VRs (including DS and IS) keep their stored text. Values that do
/// not convert to the kind their VR suggests fall back to text, and then to
/// a byte count, so a non-conformant element never fails the whole file.
fn decode_element<I: HasLength, P>(elem: &DataElement<I, P>) -> ElementValue {
    match elem.vr() {
        VR::SQ => ElementValue::Sequence(elem.items().map(|items| items.len()).unwrap_or(0)),
        VR::US | VR::UL | VR::SS | VR::SL | VR::UV | VR::SV => elem
            .to_multi_int::<i64>()
            .map(ElementValue::Int)
            .unwrap_or_else(|_| text_or_bytes(elem)),
        VR::FL | VR::FD => elem
            .to_multi_float64()
            .map(ElementValue::Float)
            .unwrap_or_else(|_| text_or_bytes(elem)),
        VR::UN => unknown_value(elem),
        VR::OB | VR::OW | VR::OF | VR::OD | VR::OL | VR::OV => byte_len(elem),
        _ => text_or_bytes(elem),
    }
}

fn text_or_bytes<I: HasLength, P>(elem: &DataElement<I, P>) -> ElementValue {
    match elem.to_str() {
        Ok(s) => text_value(&s),
        Err(_) => byte_len(elem),
    }
}

/// UN values are raw bytes; printable UTF-8 content is kept as text
fn unknown_value<I: HasLength, P>(elem: &DataElement<I, P>) -> ElementValue {
    let bytes = match elem.value().primitive() {
        Some(p) => p.to_bytes(),
        None => return ElementValue::Bytes(0),
    };
    match std::str::from_utf8(&bytes) {
        Ok(s) if is_printable(s) => text_value(s),
        _ => ElementValue::Bytes(bytes.len()),
    }
}

fn is_printable(s: &str) -> bool {
    s.chars()
        .all(|c| !c.is_control() || c == '\0' || c == '\n' || c == '\r' || c == '\t')
}

fn byte_len<I: HasLength, P>(elem: &DataElement<I, P>) -> ElementValue {
    let len = elem
        .value()
        .primitive()
        .map(|p| p.to_bytes().len())
        .unwrap_or(0);
    ElementValue::Bytes(len)
}

/// Strips DICOM padding (trailing spaces and NULs, leading spaces)
fn text_value(s: &str) -> ElementValue {
    ElementValue::Text(s.trim_matches(|c| c == ' ' || c == '\0').to_string())
}
