//! Phone number display formatting.
//!
//! Formatting is best-effort: a number that libphonenumber cannot parse is
//! shown as written.

use rlibphonenumber::{PHONE_NUMBER_UTIL, PhoneNumber, PhoneNumberFormat, region_code::RegionCode};
use vcfkit_core::config::PhoneConfig;

/// Formats raw `TEL` values for display.
pub trait PhoneFormatter: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// Returns values trimmed but otherwise unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl PhoneFormatter for Passthrough {
    fn format(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}

/// Formats numbers as E.164 using libphonenumber.
///
/// Numbers without a country code are resolved against `region` when one is
/// configured. A `tel:` URI scheme is stripped and extensions are kept as
/// `;ext=`.
#[derive(Debug, Clone, Default)]
pub struct LibPhoneFormatter {
    region: Option<String>,
}

impl LibPhoneFormatter {
    #[must_use]
    pub fn new(region: Option<&str>) -> Self {
        Self {
            region: region
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_ascii_uppercase),
        }
    }

    fn candidate_regions(&self) -> Vec<&str> {
        let unknown = RegionCode::get_unknown();
        let mut candidates: Vec<&str> = self.region.iter().map(String::as_str).collect();
        if candidates.iter().all(|c| !c.eq_ignore_ascii_case(unknown)) {
            candidates.push(unknown);
        }
        candidates
    }
}

impl PhoneFormatter for LibPhoneFormatter {
    fn format(&self, raw: &str) -> String {
        let number = strip_tel_scheme(raw.trim());
        if number.is_empty() {
            return String::new();
        }

        for region in self.candidate_regions() {
            if let Ok(parsed) = PHONE_NUMBER_UTIL.parse(number, region) {
                return format_e164(&parsed);
            }
        }

        tracing::trace!(number, "Phone number not recognised, leaving as written");
        number.to_string()
    }
}

/// Builds the formatter selected by the phone settings.
#[must_use]
pub fn formatter_for(config: &PhoneConfig) -> Box<dyn PhoneFormatter> {
    if config.format {
        Box::new(LibPhoneFormatter::new(config.region()))
    } else {
        Box::new(Passthrough)
    }
}

fn format_e164(number: &PhoneNumber) -> String {
    let mut formatted = PHONE_NUMBER_UTIL
        .format(number, PhoneNumberFormat::E164)
        .into_owned();

    if number.has_extension() {
        let extension = number.extension();
        if !extension.is_empty() {
            formatted.push_str(";ext=");
            formatted.push_str(extension);
        }
    }

    formatted
}

fn strip_tel_scheme(value: &str) -> &str {
    match value.get(..4) {
        Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => value[4..].trim(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_only_trims() {
        assert_eq!(Passthrough.format("  (212) 555-0199 "), "(212) 555-0199");
    }

    #[test]
    fn international_number_to_e164() {
        let formatter = LibPhoneFormatter::new(None);
        assert_eq!(formatter.format("+1 212-555-0199"), "+12125550199");
    }

    #[test]
    fn national_number_uses_default_region() {
        let formatter = LibPhoneFormatter::new(Some("us"));
        assert_eq!(formatter.format("(212) 555-0199"), "+12125550199");
    }

    #[test]
    fn tel_scheme_is_stripped() {
        let formatter = LibPhoneFormatter::new(None);
        assert_eq!(formatter.format("tel:+44 20 7946 0958"), "+442079460958");
    }

    #[test]
    fn unparseable_number_is_left_as_written() {
        let formatter = LibPhoneFormatter::new(None);
        assert_eq!(formatter.format("ask reception"), "ask reception");
        assert_eq!(formatter.format("   "), "");
    }

    #[test]
    fn settings_select_formatter() {
        let raw = PhoneConfig {
            format: false,
            region: Some("US".into()),
        };
        assert_eq!(formatter_for(&raw).format("(212) 555-0199"), "(212) 555-0199");

        let formatted = PhoneConfig {
            format: true,
            region: Some("US".into()),
        };
        assert_eq!(formatter_for(&formatted).format("(212) 555-0199"), "+12125550199");
    }
}
