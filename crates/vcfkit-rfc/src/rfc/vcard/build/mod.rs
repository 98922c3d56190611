//! vCard serialization.
//!
//! This module builds a vCard 3.0 document from a flat field set:
//! - Fields: the form-like input and its validation
//! - Escape: text and parameter value escaping
//! - Fold: content line folding at 75 octets
//! - Serializer: property ordering, `UID`/`REV` stamping

mod escape;
mod fields;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fields::{ContactFields, INPUT_DATE_FORMAT, ValidationError};
pub use fold::fold_line;
pub use serializer::{REV_FORMAT, SerializeOptions, generate, serialize, serialize_with};
