//! The contact record produced by the parser.

use std::collections::BTreeMap;

use serde::Serialize;

use super::parameter::types;
use super::property::{OtherValue, PropertyValue};
use super::structured::StructuredName;

/// One parsed vCard entry.
///
/// `tel`, `email` and `adr` hold every occurrence in document order.
/// Properties the record does not model land in `other`, keyed by the
/// uppercased property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(rename = "fn", skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<StructuredName>,
    pub tel: Vec<PropertyValue>,
    pub email: Vec<PropertyValue>,
    pub adr: Vec<PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    pub other: BTreeMap<String, OtherValue>,
}

impl Contact {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a property in `other`, promoting the slot to a sequence on the
    /// second occurrence of the same name.
    pub fn insert_other(&mut self, name: &str, value: PropertyValue) {
        let key = name.to_ascii_uppercase();
        match self.other.get_mut(&key) {
            Some(slot) => slot.push(value),
            None => {
                self.other.insert(key, OtherValue::Single(value));
            }
        }
    }

    /// Returns the `other` slot for a property name (case-insensitive).
    #[must_use]
    pub fn other(&self, name: &str) -> Option<&OtherValue> {
        self.other.get(&name.to_ascii_uppercase())
    }

    /// Returns the name to show for this contact: `fn` if present, otherwise
    /// the structured name.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        if let Some(formatted) = self.formatted_name.as_deref()
            && !formatted.trim().is_empty()
        {
            return Some(formatted.to_string());
        }

        self.n
            .as_ref()
            .map(StructuredName::display_name)
            .filter(|name| !name.is_empty())
    }

    /// Returns the phone to show first: the first `TYPE=CELL` number,
    /// otherwise the first number.
    #[must_use]
    pub fn primary_phone(&self) -> Option<&PropertyValue> {
        self.tel
            .iter()
            .find(|tel| tel.has_type(types::CELL))
            .or_else(|| self.tel.first())
    }

    /// Returns the email to show first: the first preferred address
    /// (`PREF=1`), otherwise the first address.
    #[must_use]
    pub fn primary_email(&self) -> Option<&PropertyValue> {
        self.email
            .iter()
            .find(|email| email.is_preferred())
            .or_else(|| self.email.first())
    }
}
