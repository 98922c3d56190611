//! Quoted-printable value decoding.
//!
//! Values flagged `ENCODING=QUOTED-PRINTABLE` are decoded to bytes and then
//! interpreted in the declared `CHARSET` (UTF-8 when absent). Decoding never
//! fails from the caller's point of view: when the strict pass errors, a
//! best-effort pass resolves only the well-formed `=XX` escapes.

use std::borrow::Cow;

use encoding_rs::Encoding;

use super::error::{DecodeError, DecodeResult};
use crate::rfc::vcard::core::ParameterMap;

/// Charset assumed when a quoted-printable value declares none.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Decodes a raw property value according to its parameters.
///
/// Values that are not quoted-printable are returned unchanged.
#[must_use]
pub fn decode_value(raw: &str, params: &ParameterMap) -> String {
    if !params.is_quoted_printable() {
        return raw.to_string();
    }

    let charset = params.charset().unwrap_or(DEFAULT_CHARSET);
    match decode_quoted_printable(raw, charset) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::warn!(
                %error,
                charset,
                "Quoted-printable decode failed, using best-effort value"
            );
            decode_best_effort(raw)
        }
    }
}

/// Strictly decodes a quoted-printable value in the given charset.
///
/// ## Errors
/// Returns an error if the charset label is unknown, an `=` is not followed
/// by two hex digits, or the decoded bytes are invalid in the charset.
pub fn decode_quoted_printable(raw: &str, charset: &str) -> DecodeResult<String> {
    let encoding = Encoding::for_label(charset.trim().as_bytes())
        .ok_or_else(|| DecodeError::unknown_charset(charset))?;

    let bytes = unescape_bytes(&remove_soft_breaks(raw))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| DecodeError::invalid_bytes(encoding.name()))
}

/// Replaces only well-formed `=XX` escapes, each by the character with that
/// code point. Everything else is left untouched.
#[must_use]
pub fn decode_best_effort(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('=') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(byte) = hex_pair(after.as_bytes()) {
            result.push(char::from(byte));
            rest = &after[2..];
        } else {
            result.push('=');
            rest = after;
        }
    }

    result.push_str(rest);
    result
}

/// Removes soft line breaks (`=` followed by a line terminator).
fn remove_soft_breaks(raw: &str) -> Cow<'_, str> {
    if raw.contains("=\r") || raw.contains("=\n") {
        Cow::Owned(
            raw.replace("=\r\n", "")
                .replace("=\n", "")
                .replace("=\r", ""),
        )
    } else {
        Cow::Borrowed(raw)
    }
}

/// Turns `=XX` escapes into bytes; every other byte is copied, so ASCII
/// characters contribute one byte and non-ASCII characters their UTF-8 bytes.
fn unescape_bytes(s: &str) -> DecodeResult<Vec<u8>> {
    let input = s.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i] == b'=' {
            let byte = hex_pair(&input[i + 1..]).ok_or_else(|| DecodeError::malformed_escape(i))?;
            bytes.push(byte);
            i += 3;
        } else {
            bytes.push(input[i]);
            i += 1;
        }
    }

    Ok(bytes)
}

/// Decodes the first two bytes of `s` as a hex pair.
fn hex_pair(s: &[u8]) -> Option<u8> {
    let [high, low, ..] = s else {
        return None;
    };
    let high = char::from(*high).to_digit(16)?;
    let low = char::from(*low).to_digit(16)?;
    u8::try_from((high << 4) | low).ok()
}
