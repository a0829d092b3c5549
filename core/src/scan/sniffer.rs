use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Length of the DICOM preamble preceding the magic marker
pub const PREAMBLE_LEN: usize = 128;

/// Magic marker following the preamble
pub const DICOM_MAGIC: &[u8; 4] = b"DICM";

const HEADER_LEN: usize = PREAMBLE_LEN + DICOM_MAGIC.len();

/// Checks whether a byte buffer starts with a DICOM Part 10 header
///
/// Buffers shorter than 132 bytes never match.
pub fn has_dicom_marker(bytes: &[u8]) -> bool {
    bytes.get(PREAMBLE_LEN..HEADER_LEN) == Some(&DICOM_MAGIC[..])
}

/// Checks if a file has a DICOM header
///
/// DICOM files have:
/// - 128-byte preamble
/// - 4-byte "DICM" magic string at offset 128
///
/// At most 132 bytes are read. Files that cannot be opened or read are
/// reported as non-DICOM.
pub fn is_dicom_file(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = Vec::with_capacity(HEADER_LEN);
    match file.take(HEADER_LEN as u64).read_to_end(&mut buffer) {
        Ok(_) => has_dicom_marker(&buffer),
        Err(_) => false,
    }
}
