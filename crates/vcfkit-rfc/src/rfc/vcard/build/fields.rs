//! Form-like field set consumed by the serializer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rfc::vcard::core::StructuredName;

/// Date format accepted for birthday and anniversary fields.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Generator precondition failures.
///
/// These are reported before serialization is attempted and are distinct
/// from decode errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a formatted name or a given or family name is required")]
    MissingName,

    #[error("{field} must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Flat set of user-entered fields for one contact.
///
/// Empty strings mean "not provided". Values are trimmed on emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub prefix: String,
    pub given: String,
    pub middle: String,
    pub family: String,
    pub suffix: String,
    /// Explicit display name. Derived from the name parts when empty.
    pub formatted_name: String,

    pub phone: String,
    pub phone_type: String,
    pub email: String,
    pub email_type: String,

    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub address_type: String,

    pub organization: String,
    pub title: String,
    pub note: String,
    pub url: String,
    pub social_profile: String,
    pub social_network: String,

    /// `YYYY-MM-DD`
    pub birthday: String,
    /// `YYYY-MM-DD`
    pub anniversary: String,
}

impl ContactFields {
    /// Returns the structured name built from the name parts.
    #[must_use]
    pub fn structured_name(&self) -> StructuredName {
        StructuredName {
            family: self.family.trim().to_string(),
            given: self.given.trim().to_string(),
            middle: self.middle.trim().to_string(),
            prefix: self.prefix.trim().to_string(),
            suffix: self.suffix.trim().to_string(),
        }
    }

    /// Returns the explicit formatted name, or the name parts joined in
    /// reading order.
    #[must_use]
    pub fn display_name(&self) -> String {
        let explicit = self.formatted_name.trim();
        if explicit.is_empty() {
            self.structured_name().full_name()
        } else {
            explicit.to_string()
        }
    }

    /// Checks the generator preconditions.
    ///
    /// ## Errors
    /// Returns [`ValidationError::MissingName`] when neither a formatted name
    /// nor a given or family name is present, and
    /// [`ValidationError::InvalidDate`] for a date that is not `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_name = [&self.formatted_name, &self.given, &self.family]
            .iter()
            .any(|part| !part.trim().is_empty());
        if !has_name {
            return Err(ValidationError::MissingName);
        }

        validate_date("birthday", &self.birthday)?;
        validate_date("anniversary", &self.anniversary)?;
        Ok(())
    }
}

fn validate_date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).is_ok() {
        return Ok(());
    }

    Err(ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
