//! Core type definitions for DICOM cataloging
//!
//! - [`TagSpec`]: caller-supplied element identifier (`gggg,eeee`)
//! - [`ElementValue`]: decoded value of a single data element

mod tag_spec;
mod value;

pub use tag_spec::{TagSpec, FILE_META_GROUP};
pub use value::ElementValue;
