//! Structured vCard values (N and ADR).

use serde::Serialize;

use crate::rfc::vcard::parse::{split_structured, structured_component};

/// Structured name (N property).
///
/// Components map positionally from `family;given;middle;prefix;suffix`.
/// Missing components are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
    pub middle: String,
    pub prefix: String,
    pub suffix: String,
}

impl StructuredName {
    /// Parses an N value. Only the first five components are used.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let parts = split_structured(value);
        Self {
            family: structured_component(&parts, 0),
            given: structured_component(&parts, 1),
            middle: structured_component(&parts, 2),
            prefix: structured_component(&parts, 3),
            suffix: structured_component(&parts, 4),
        }
    }

    /// Returns whether all components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    /// Components in wire order.
    #[must_use]
    pub fn components(&self) -> [&str; 5] {
        [
            self.family.as_str(),
            self.given.as_str(),
            self.middle.as_str(),
            self.prefix.as_str(),
            self.suffix.as_str(),
        ]
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.given.as_str(), self.family.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats every non-empty component in reading order
    /// (prefix given middle family suffix).
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            self.prefix.as_str(),
            self.given.as_str(),
            self.middle.as_str(),
            self.family.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Address (ADR property) split into its seven components.
///
/// [`Contact::adr`](super::Contact::adr) keeps the raw value; this type is
/// for callers that want the parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub po_box: String,
    pub extended: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Splits an ADR value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let parts = split_structured(value);
        Self {
            po_box: structured_component(&parts, 0),
            extended: structured_component(&parts, 1),
            street: structured_component(&parts, 2),
            locality: structured_component(&parts, 3),
            region: structured_component(&parts, 4),
            postal_code: structured_component(&parts, 5),
            country: structured_component(&parts, 6),
        }
    }

    /// Returns whether the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|c| c.is_empty())
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
