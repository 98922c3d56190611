//! vCard property values.

use serde::Serialize;

use super::parameter::{ParameterMap, names as param_names, types};
use crate::rfc::vcard::parse::unescape_text;

/// One occurrence of a property: its (decoded) value and parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyValue {
    pub value: String,
    pub params: ParameterMap,
    /// Property group (e.g., "item1" in "item1.TEL").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl PropertyValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_params(value: impl Into<String>, params: ParameterMap) -> Self {
        Self {
            value: value.into(),
            params,
            group: None,
        }
    }

    /// Returns the value of a single-valued parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.value(name)
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params.has_type(type_value)
    }

    /// Returns whether the property is marked preferred, either with
    /// `PREF=1` (vCard 4.0) or a `PREF` type token (vCard 3.0).
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.param(param_names::PREF)
            .is_some_and(|p| p.trim() == "1")
            || self.has_type(types::PREF)
    }

    /// Returns the value with vCard text escapes resolved.
    #[must_use]
    pub fn text(&self) -> String {
        unescape_text(&self.value)
    }
}

/// Slot in [`Contact::other`](super::Contact::other).
///
/// The first occurrence of a property is stored as `Single`; a second
/// occurrence promotes the slot to `Multiple`, keeping arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OtherValue {
    Single(PropertyValue),
    Multiple(Vec<PropertyValue>),
}

impl OtherValue {
    /// Appends another occurrence, promoting `Single` to `Multiple`.
    pub fn push(&mut self, value: PropertyValue) {
        match self {
            Self::Multiple(values) => values.push(value),
            Self::Single(first) => {
                let first = std::mem::take(first);
                *self = Self::Multiple(vec![first, value]);
            }
        }
    }

    /// Returns the first stored occurrence.
    #[must_use]
    pub fn first(&self) -> Option<&PropertyValue> {
        self.as_slice().first()
    }

    /// Returns every occurrence in arrival order.
    #[must_use]
    pub fn as_slice(&self) -> &[PropertyValue] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }
}

/// Property names as constants.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const ORG: &str = "ORG";
    pub const ADR: &str = "ADR";

    pub const TITLE: &str = "TITLE";
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const X_SOCIALPROFILE: &str = "X-SOCIALPROFILE";
    pub const UID: &str = "UID";
    pub const REV: &str = "REV";
}
