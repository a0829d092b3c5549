use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;

// File Meta Information Tags (group 0002)
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);

// Study/Series Identification Tags
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

// Decoding stops before this element
pub const PIXEL_DATA: Tag = dicom_dictionary_std::tags::PIXEL_DATA;

/// Looks up the standard keyword for a tag, e.g. `Modality` for (0008,0060)
///
/// Returns `None` for private or unknown tags
pub fn tag_keyword(tag: Tag) -> Option<String> {
    let dict = StandardDataDictionary;
    dict.by_tag(tag).map(|entry| entry.alias().to_string())
}
