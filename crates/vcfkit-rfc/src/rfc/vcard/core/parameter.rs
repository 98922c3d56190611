//! vCard parameter map.

use std::collections::BTreeMap;

use serde::Serialize;

/// Parameter names with special handling.
pub mod names {
    pub const TYPE: &str = "TYPE";
    pub const ENCODING: &str = "ENCODING";
    pub const CHARSET: &str = "CHARSET";
    pub const PREF: &str = "PREF";
}

/// The `ENCODING` value that triggers value decoding.
pub const QUOTED_PRINTABLE: &str = "QUOTED-PRINTABLE";

/// A parameter value.
///
/// `TYPE` is the only parameter that accumulates tokens; everything else
/// holds the last value written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Types(Vec<String>),
}

impl ParamValue {
    /// Returns the value of a single-valued parameter.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Types(_) => None,
        }
    }

    /// Returns the tokens of a `TYPE` parameter.
    #[must_use]
    pub fn types(&self) -> &[String] {
        match self {
            Self::Single(_) => &[],
            Self::Types(tokens) => tokens,
        }
    }
}

/// Parameters of one property, keyed by uppercased name.
///
/// `TYPE` tokens are uppercased and deduplicated in arrival order. The
/// `TYPE` key only exists while it holds at least one token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<String, ParamValue>);

impl ParameterMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `TYPE` token unless it is empty or already present.
    pub fn add_type(&mut self, token: &str) {
        let token = token.trim().to_ascii_uppercase();
        if token.is_empty() {
            return;
        }

        let slot = self
            .0
            .entry(names::TYPE.to_string())
            .or_insert_with(|| ParamValue::Types(Vec::new()));

        match slot {
            ParamValue::Types(tokens) => {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
            ParamValue::Single(_) => *slot = ParamValue::Types(vec![token]),
        }
    }

    /// Sets a parameter. `TYPE` values are split on `,` and merged as tokens;
    /// any other name overwrites its previous value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = name.trim().to_ascii_uppercase();
        let value = value.into();

        if name == names::TYPE {
            for token in value.split(',') {
                self.add_type(token);
            }
        } else {
            self.0.insert(name, ParamValue::Single(value));
        }
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(&name.to_ascii_uppercase())
    }

    /// Returns the value of a single-valued parameter.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Returns the `TYPE` tokens, empty if there are none.
    #[must_use]
    pub fn types(&self) -> &[String] {
        self.get(names::TYPE).map_or(&[], ParamValue::types)
    }

    /// Returns whether `TYPE` contains the token (case-insensitive).
    #[must_use]
    pub fn has_type(&self, token: &str) -> bool {
        self.types().iter().any(|t| t.eq_ignore_ascii_case(token))
    }

    /// Returns whether the value is flagged `ENCODING=QUOTED-PRINTABLE`.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.value(names::ENCODING)
            .is_some_and(|e| e.trim().eq_ignore_ascii_case(QUOTED_PRINTABLE))
    }

    /// Returns the declared `CHARSET`, if any.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.value(names::CHARSET)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Common TYPE values as constants.
pub mod types {
    pub const CELL: &str = "CELL";
    pub const PREF: &str = "PREF";
}
