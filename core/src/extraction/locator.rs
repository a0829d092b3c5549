use crate::types::{ElementValue, TagSpec};

use super::container::DecodedContainer;

/// Finds the value of the requested element in a decoded file
///
/// Group 0002 identifiers are resolved against the file meta block only;
/// every other group is resolved against the main data set only. A missing
/// element yields [`ElementValue::Absent`].
pub fn locate(container: &DecodedContainer, spec: &TagSpec) -> ElementValue {
    let block = if spec.is_file_meta() {
        container.file_meta()
    } else {
        container.main()
    };

    block
        .get(&spec.tag())
        .cloned()
        .unwrap_or(ElementValue::Absent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::Tag;
    use std::collections::BTreeMap;

    fn text(s: &str) -> ElementValue {
        ElementValue::Text(s.to_string())
    }

    #[test]
    fn test_locate_main_element() {
        let main = BTreeMap::from([(Tag(0x0008, 0x0060), text("MR"))]);
        let container = DecodedContainer::from_parts(BTreeMap::new(), main);

        let spec = TagSpec::parse("0008,0060").unwrap();
        assert_eq!(locate(&container, &spec), text("MR"));
    }

    #[test]
    fn test_locate_missing_is_absent() {
        let container = DecodedContainer::default();
        let spec = TagSpec::parse("0008,0060").unwrap();

        let value = locate(&container, &spec);
        assert!(value.is_absent());
        assert_eq!(value.to_cell(), "");
    }

    #[test]
    fn test_locate_file_meta_element() {
        let meta = BTreeMap::from([(Tag(0x0002, 0x0010), text("1.2.840.10008.1.2.1"))]);
        let container = DecodedContainer::from_parts(meta, BTreeMap::new());

        let spec = TagSpec::parse("0002,0010").unwrap();
        assert_eq!(locate(&container, &spec), text("1.2.840.10008.1.2.1"));
    }

    #[test]
    fn test_file_meta_never_falls_back_to_main() {
        // a stray group 0002 element in the main data set must not be used
        let main = BTreeMap::from([(Tag(0x0002, 0x0013), text("FROM_MAIN"))]);
        let container = DecodedContainer::from_parts(BTreeMap::new(), main);

        let spec = TagSpec::parse("0002,0013").unwrap();
        assert!(locate(&container, &spec).is_absent());
    }

    #[test]
    fn test_main_never_falls_back_to_file_meta() {
        let meta = BTreeMap::from([(Tag(0x0002, 0x0010), text("1.2.840.10008.1.2"))]);
        let container = DecodedContainer::from_parts(meta, BTreeMap::new());

        // same element number, different group
        let spec = TagSpec::parse("0008,0010").unwrap();
        assert!(locate(&container, &spec).is_absent());
    }
}
