//! vCard value decoding error types.
//!
//! Document parsing itself never fails; these errors only surface from the
//! strict quoted-printable pass before the caller falls back.

use std::fmt;

/// Result type for value decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// An error that occurred while decoding a property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// The kind of error.
    pub kind: DecodeErrorKind,
    /// Additional context or message.
    pub message: String,
}

impl DecodeError {
    /// Creates a new decode error.
    #[must_use]
    pub fn new(kind: DecodeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an unknown charset error.
    #[must_use]
    pub fn unknown_charset(label: &str) -> Self {
        Self::new(DecodeErrorKind::UnknownCharset, format!("{label:?}"))
    }

    /// Creates a malformed escape error for the `=` at byte `offset`.
    #[must_use]
    pub fn malformed_escape(offset: usize) -> Self {
        Self::new(
            DecodeErrorKind::MalformedEscape,
            format!("`=` at offset {offset} is not followed by two hex digits"),
        )
    }

    /// Creates an error for bytes that are not valid in `charset`.
    #[must_use]
    pub fn invalid_bytes(charset: &str) -> Self {
        Self::new(
            DecodeErrorKind::InvalidBytes,
            format!("decoded bytes are not valid {charset}"),
        )
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for DecodeError {}

/// The kind of decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// `CHARSET` names no known encoding.
    UnknownCharset,
    /// `=` not followed by two hex digits.
    MalformedEscape,
    /// The byte sequence is invalid in the declared charset.
    InvalidBytes,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCharset => write!(f, "unknown charset"),
            Self::MalformedEscape => write!(f, "malformed escape"),
            Self::InvalidBytes => write!(f, "invalid byte sequence"),
        }
    }
}
