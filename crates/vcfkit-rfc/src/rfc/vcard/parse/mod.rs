//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use vcfkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=INTERNET:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse::parse(input);
//! assert_eq!(contacts[0].formatted_name.as_deref(), Some("John Doe"));
//! assert_eq!(contacts[0].email[0].value, "john@example.com");
//! ```
//!
//! ## Features
//!
//! - Tolerates `\r\n`, `\n` and `\r` line endings
//! - Handles line folding/unfolding and quoted-printable soft breaks
//! - Parses property groups (item1.TEL) and legacy bare TYPE tokens (TEL;CELL)
//! - Decodes quoted-printable values in the declared CHARSET

mod decode;
mod error;
mod lexer;
mod parser;
mod values;

pub use decode::{DEFAULT_CHARSET, decode_best_effort, decode_quoted_printable, decode_value};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use lexer::{ContentLine, normalize_line_endings, parse_content_line, split_lines};
pub use parser::{ContactBuilder, parse};
pub use values::{split_structured, structured_component, unescape_text};
