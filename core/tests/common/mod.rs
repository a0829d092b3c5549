//! Common utilities for integration tests.

#![allow(dead_code)]

use dicom_core::value::PrimitiveValue;
use dicom_core::{DataElement, Tag, VR};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::path::Path;

pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.9.7433";

const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
const MODALITY: Tag = Tag(0x0008, 0x0060);
const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
const ROWS: Tag = Tag(0x0028, 0x0010);
const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Description of a synthetic DICOM file
#[derive(Debug, Clone, Default)]
pub struct DicomFixture<'a> {
    pub sop_instance_uid: &'a str,
    pub series_uid: Option<&'a str>,
    pub modality: Option<&'a str>,
    pub with_pixel_data: bool,
}

impl<'a> DicomFixture<'a> {
    pub fn new(sop_instance_uid: &'a str) -> Self {
        Self {
            sop_instance_uid,
            ..Default::default()
        }
    }

    pub fn series(mut self, uid: &'a str) -> Self {
        self.series_uid = Some(uid);
        self
    }

    pub fn modality(mut self, modality: &'a str) -> Self {
        self.modality = Some(modality);
        self
    }

    pub fn pixel_data(mut self) -> Self {
        self.with_pixel_data = true;
        self
    }

    /// Writes a Part 10 file (preamble, `DICM`, meta group, data set)
    pub fn write(&self, path: &Path) {
        let mut elements = vec![
            DataElement::new(SOP_CLASS_UID, VR::UI, PrimitiveValue::from(MR_IMAGE_STORAGE)),
            DataElement::new(
                SOP_INSTANCE_UID,
                VR::UI,
                PrimitiveValue::from(self.sop_instance_uid),
            ),
            DataElement::new(ROWS, VR::US, PrimitiveValue::from(4_u16)),
        ];
        if let Some(uid) = self.series_uid {
            elements.push(DataElement::new(
                SERIES_INSTANCE_UID,
                VR::UI,
                PrimitiveValue::from(uid),
            ));
        }
        if let Some(modality) = self.modality {
            elements.push(DataElement::new(
                MODALITY,
                VR::CS,
                PrimitiveValue::from(modality),
            ));
        }
        if self.with_pixel_data {
            elements.push(DataElement::new(
                PIXEL_DATA,
                VR::OW,
                PrimitiveValue::U16(vec![0u16; 16].into()),
            ));
        }

        let meta = FileMetaTableBuilder::new()
            .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
            .media_storage_sop_class_uid(MR_IMAGE_STORAGE)
            .media_storage_sop_instance_uid(self.sop_instance_uid)
            .implementation_class_uid(IMPLEMENTATION_CLASS_UID)
            .implementation_version_name("DCMCAT_TEST")
            .source_application_entity_title("SOURCE_AE")
            .sending_application_entity_title("SENDER_AE")
            .receiving_application_entity_title("RECV_AE")
            .private_information_creator_uid("1.2.826.0.1.3680043.9.7433.1")
            .private_information(vec![1_u8, 2, 3, 4]);

        InMemDicomObject::from_element_iter(elements)
            .with_meta(meta)
            .expect("valid file meta")
            .write_to_file(path)
            .expect("write DICOM fixture");
    }
}

/// Writes a file that passes the `DICM` check but has no valid meta group
pub fn write_corrupt_dicom(path: &Path) {
    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");
    bytes.extend_from_slice(&[0xFF; 64]);
    std::fs::write(path, bytes).expect("write corrupt fixture");
}

/// Minimal CSV reader for checking written catalogs
///
/// Handles quoted fields with doubled quotes; rows end at `\n` outside quotes.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => row.push(std::mem::take(&mut field)),
            ('\n', false) => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}
