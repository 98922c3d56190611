//! vCard implementation.
//!
//! This module parses vCard documents (2.1, 3.0 and 4.0 are all read with
//! the same lenient grammar) into [`Contact`] records, and builds vCard 3.0
//! documents from a flat [`ContactFields`] set.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use vcfkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=CELL:+1 555 0100\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse(input);
//! assert_eq!(contacts[0].formatted_name.as_deref(), Some("John Doe"));
//! assert!(contacts[0].tel[0].has_type("cell"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use vcfkit_rfc::rfc::vcard::{ContactFields, SerializeOptions, serialize};
//!
//! let fields = ContactFields {
//!     given: "Jane".into(),
//!     family: "Doe".into(),
//!     email: "jane@example.com".into(),
//!     ..ContactFields::default()
//! };
//! assert!(fields.validate().is_ok());
//!
//! let output = serialize(&fields, SerializeOptions::default());
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! assert!(output.contains("EMAIL:jane@example.com\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Record types (`Contact`, `PropertyValue`, `ParameterMap`, etc.)
//! - [`parse`] - Unfolding, tokenizing, decoding and contact building
//! - [`build`] - Field set, validation and serialization

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{
    ContactFields, SerializeOptions, ValidationError, generate, serialize, serialize_with,
};
pub use self::core::{
    Address, Contact, OtherValue, ParamValue, ParameterMap, PropertyValue, StructuredName,
};
pub use parse::{ContactBuilder, DecodeError, DecodeErrorKind, parse};
