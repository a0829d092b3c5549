//! File discovery: directory walking and DICOM sniffing

pub mod sniffer;
pub mod walker;

pub use sniffer::{has_dicom_marker, is_dicom_file};
pub use walker::{collect_files_with_extension, walk_files};
