//! File name generation for exported contacts.
//!
//! ## Summary
//! Turns a contact's display name into a file-system safe `.vcf` file name.
//! Slugs are lowercase, alphanumeric with hyphens.

use crate::constants::VCARD_EXTENSION;

const FALLBACK_STEM: &str = "contact";

/// Generate a file-system safe slug from a display name.
///
/// Lowercases, replaces whitespace and punctuation with hyphens, collapses
/// repeated hyphens and trims edge hyphens. Letters outside ASCII are kept.
///
/// Examples:
/// - "Jane Doe" -> "jane-doe"
/// - "Dr. John O'Neil, Jr." -> "dr-john-o-neil-jr"
/// - "Jürgen Müller" -> "jürgen-müller"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Builds the download file name for a contact, e.g. `jane-doe.vcf`.
///
/// Falls back to `contact.vcf` when the name has no usable characters.
#[must_use]
pub fn contact_file_name(display_name: &str) -> String {
    let slug = generate_slug(display_name);
    let stem = if slug.is_empty() {
        FALLBACK_STEM
    } else {
        slug.as_str()
    };
    format!("{stem}.{VCARD_EXTENSION}")
}
