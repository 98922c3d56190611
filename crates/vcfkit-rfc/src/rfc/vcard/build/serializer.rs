//! vCard 3.0 serialization of a [`ContactFields`] set.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use vcfkit_core::constants::{BEGIN_VCARD, END_VCARD, LINE_ENDING, VERSION_LINE};

use super::escape::{escape_param_value, escape_text};
use super::fields::ContactFields;
use super::fold::fold_line;
use crate::error::RfcResult;
use crate::rfc::vcard::core::{names, param_names};

/// `REV` timestamp format (basic ISO 8601, UTC).
pub const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Serializer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Fold lines longer than 75 octets.
    pub fold_lines: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { fold_lines: true }
    }
}

/// ## Summary
/// Validates the field set, then serializes it with a fresh `UID` and the
/// current `REV`.
///
/// ## Errors
/// Returns [`RfcError::Validation`](crate::error::RfcError::Validation) when
/// the field set fails [`ContactFields::validate`]. Nothing is serialized in
/// that case.
pub fn generate(fields: &ContactFields, options: SerializeOptions) -> RfcResult<String> {
    fields.validate()?;
    Ok(serialize(fields, options))
}

/// Serializes one contact, stamping a fresh `UID` and the current `REV`.
#[must_use]
pub fn serialize(fields: &ContactFields, options: SerializeOptions) -> String {
    serialize_with(fields, options, Uuid::new_v4(), Utc::now())
}

/// Serializes one contact with the given `UID` and `REV` timestamp.
///
/// Empty fields are skipped. `N` is emitted when any of its five
/// components is present.
#[tracing::instrument(skip_all, fields(uid = %uid))]
#[must_use]
pub fn serialize_with(
    fields: &ContactFields,
    options: SerializeOptions,
    uid: Uuid,
    revision: DateTime<Utc>,
) -> String {
    let mut lines = vec![BEGIN_VCARD.to_string(), VERSION_LINE.to_string()];

    lines.extend(
        property_lines(fields)
            .into_iter()
            .chain([
                PropertyLine::new(names::UID, uid.to_string()),
                PropertyLine::new(names::REV, revision.format(REV_FORMAT).to_string()),
            ])
            .map(|line| line.render()),
    );
    lines.push(END_VCARD.to_string());

    if options.fold_lines {
        lines = lines.iter().map(|line| fold_line(line)).collect();
    }

    tracing::debug!(count = lines.len(), "Serialized vCard");

    let mut output = lines.join(LINE_ENDING);
    output.push_str(LINE_ENDING);
    output
}

/// Builds the content properties in emission order.
fn property_lines(fields: &ContactFields) -> Vec<PropertyLine> {
    let mut lines = Vec::new();

    let name = fields.structured_name();
    if !name.is_empty() {
        let value = name
            .components()
            .iter()
            .map(|component| escape_text(component))
            .collect::<Vec<_>>()
            .join(";");
        lines.push(PropertyLine::new(names::N, value));
    }

    let display_name = fields.display_name();
    push_text(&mut lines, names::FN, &display_name);
    push_text(&mut lines, names::ORG, &fields.organization);
    push_text(&mut lines, names::TITLE, &fields.title);

    if let Some(value) = non_empty(&fields.phone) {
        lines.push(
            PropertyLine::new(names::TEL, value).param(param_names::TYPE, &fields.phone_type),
        );
    }

    if let Some(value) = non_empty(&fields.email) {
        lines.push(
            PropertyLine::new(names::EMAIL, value).param(param_names::TYPE, &fields.email_type),
        );
    }

    if let Some(value) = address_value(fields) {
        lines.push(
            PropertyLine::new(names::ADR, value).param(param_names::TYPE, &fields.address_type),
        );
    }

    if let Some(value) = non_empty(&fields.url) {
        lines.push(PropertyLine::new(names::URL, value));
    }

    if let Some(value) = non_empty(&fields.social_profile) {
        lines.push(
            PropertyLine::new(names::X_SOCIALPROFILE, value)
                .param(param_names::TYPE, &fields.social_network),
        );
    }

    if let Some(value) = non_empty(&fields.birthday) {
        lines.push(PropertyLine::new(names::BDAY, compact_date(value)));
    }

    if let Some(value) = non_empty(&fields.anniversary) {
        lines.push(PropertyLine::new(names::ANNIVERSARY, compact_date(value)));
    }

    push_text(&mut lines, names::NOTE, &fields.note);

    lines
}

/// Assembles `;;street;city;region;postal;country`. PO box and extended
/// address are always empty.
fn address_value(fields: &ContactFields) -> Option<String> {
    let components = [
        fields.street.trim(),
        fields.city.trim(),
        fields.region.trim(),
        fields.postal_code.trim(),
        fields.country.trim(),
    ];
    if components.iter().all(|c| c.is_empty()) {
        return None;
    }

    let escaped: Vec<String> = components.iter().map(|c| escape_text(c)).collect();
    Some(format!(";;{}", escaped.join(";")))
}

/// Rewrites `YYYY-MM-DD` to `YYYYMMDD`.
fn compact_date(value: &str) -> String {
    value.replace('-', "")
}

fn push_text(lines: &mut Vec<PropertyLine>, name: &'static str, value: &str) {
    if let Some(value) = non_empty(value) {
        lines.push(PropertyLine::new(name, escape_text(value)));
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Replaces every line break with a space. Verbatim values (TEL, EMAIL, URL,
/// dates) must stay on one content line.
fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// A content line under construction: `NAME[;PARAM=VALUE...]:value`.
#[derive(Debug)]
struct PropertyLine {
    name: &'static str,
    params: Vec<(&'static str, String)>,
    value: String,
}

impl PropertyLine {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            params: Vec::new(),
            value: single_line(&value.into()),
        }
    }

    /// Adds a parameter unless its value is empty.
    fn param(mut self, name: &'static str, value: &str) -> Self {
        if let Some(value) = non_empty(value) {
            self.params.push((name, escape_param_value(value)));
        }
        self
    }

    fn render(&self) -> String {
        let mut line = String::from(self.name);
        for (name, value) in &self.params {
            line.push(';');
            line.push_str(name);
            line.push('=');
            line.push_str(value);
        }
        line.push(':');
        line.push_str(&self.value);
        line
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_uid() -> Uuid {
        Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef)
    }

    fn fixed_rev() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn render(fields: &ContactFields) -> String {
        serialize_with(fields, SerializeOptions::default(), fixed_uid(), fixed_rev())
    }

    fn lines(output: &str) -> Vec<&str> {
        output.trim_end_matches("\r\n").split("\r\n").collect()
    }

    #[test]
    fn minimal_card_layout() {
        let fields = ContactFields {
            formatted_name: "Jane Doe".into(),
            ..ContactFields::default()
        };
        let output = render(&fields);

        assert_eq!(
            lines(&output),
            [
                "BEGIN:VCARD",
                "VERSION:3.0",
                "FN:Jane Doe",
                "UID:01234567-89ab-cdef-0123-456789abcdef",
                "REV:20240309T140507Z",
                "END:VCARD",
            ]
        );
        assert!(output.ends_with("END:VCARD\r\n"));
        assert!(!output.contains("\r\n\r\n"));
    }

    #[test]
    fn full_card_in_emission_order() {
        let fields = ContactFields {
            prefix: "Dr.".into(),
            given: "Jane".into(),
            family: "Doe".into(),
            phone: "+1 212 555 0199".into(),
            phone_type: "CELL".into(),
            email: "jane@example.com".into(),
            email_type: "WORK".into(),
            street: "1 Main St".into(),
            city: "Springfield".into(),
            region: "IL".into(),
            postal_code: "62701".into(),
            country: "USA".into(),
            address_type: "HOME".into(),
            organization: "Acme, Inc.".into(),
            title: "Engineer".into(),
            note: "Met at the conference\nLikes tea".into(),
            url: "https://example.com".into(),
            social_profile: "https://social.example/@jane".into(),
            social_network: "mastodon".into(),
            birthday: "1990-05-17".into(),
            anniversary: "2015-06-01".into(),
            ..ContactFields::default()
        };
        let output = render(&fields);

        assert_eq!(
            lines(&output),
            [
                "BEGIN:VCARD",
                "VERSION:3.0",
                "N:Doe;Jane;;Dr.;",
                "FN:Dr. Jane Doe",
                "ORG:Acme\\, Inc.",
                "TITLE:Engineer",
                "TEL;TYPE=CELL:+1 212 555 0199",
                "EMAIL;TYPE=WORK:jane@example.com",
                "ADR;TYPE=HOME:;;1 Main St;Springfield;IL;62701;USA",
                "URL:https://example.com",
                "X-SOCIALPROFILE;TYPE=mastodon:https://social.example/@jane",
                "BDAY:19900517",
                "ANNIVERSARY:20150601",
                "NOTE:Met at the conference\\nLikes tea",
                "UID:01234567-89ab-cdef-0123-456789abcdef",
                "REV:20240309T140507Z",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn empty_fields_are_skipped() {
        let fields = ContactFields {
            formatted_name: "Only Name".into(),
            phone: "   ".into(),
            phone_type: "CELL".into(),
            ..ContactFields::default()
        };
        let output = render(&fields);

        assert!(!output.contains("TEL"));
        assert!(!lines(&output).iter().any(|l| l.starts_with("N:")));
        assert!(!output.contains("ADR"));
    }

    #[test]
    fn name_emitted_when_any_component_present() {
        let fields = ContactFields {
            suffix: "Jr.".into(),
            ..ContactFields::default()
        };
        assert!(lines(&render(&fields)).contains(&"N:;;;;Jr."));
    }

    #[test]
    fn empty_parameter_is_omitted() {
        let fields = ContactFields {
            formatted_name: "X".into(),
            email: "x@example.com".into(),
            ..ContactFields::default()
        };
        assert!(lines(&render(&fields)).contains(&"EMAIL:x@example.com"));
    }

    #[test]
    fn address_with_only_country() {
        let fields = ContactFields {
            formatted_name: "X".into(),
            country: "Canada".into(),
            ..ContactFields::default()
        };
        assert!(lines(&render(&fields)).contains(&"ADR:;;;;;;Canada"));
    }

    #[test]
    fn long_lines_are_folded() {
        let fields = ContactFields {
            formatted_name: "X".into(),
            note: "word ".repeat(40),
            ..ContactFields::default()
        };
        let folded = render(&fields);
        assert!(folded.contains("\r\n "));

        let unfolded = serialize_with(
            &fields,
            SerializeOptions { fold_lines: false },
            fixed_uid(),
            fixed_rev(),
        );
        assert!(!unfolded.contains("\r\n "));
    }

    #[test]
    fn line_breaks_in_verbatim_values_are_flattened() {
        let fields = ContactFields {
            formatted_name: "X".into(),
            phone: "555\r\n0100".into(),
            email: "a@example.com\nEND:VCARD".into(),
            url: "https://x.example\rX-EXTRA:1".into(),
            ..ContactFields::default()
        };
        let output = render(&fields);

        assert_eq!(output.matches('\n').count(), output.matches("\r\n").count());
        assert_eq!(output.matches('\r').count(), output.matches("\r\n").count());
        let lines = lines(&output);
        assert!(lines.contains(&"TEL:555 0100"));
        assert!(lines.contains(&"EMAIL:a@example.com END:VCARD"));
        assert!(lines.contains(&"URL:https://x.example X-EXTRA:1"));
        assert_eq!(lines.iter().filter(|l| **l == "END:VCARD").count(), 1);
    }

    #[test]
    fn generate_rejects_nameless_fields() {
        let fields = ContactFields {
            email: "nobody@example.com".into(),
            ..ContactFields::default()
        };
        let err = generate(&fields, SerializeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RfcError::Validation(super::super::ValidationError::MissingName)
        ));
    }

    #[test]
    fn serialize_stamps_fresh_uid_and_rev() {
        let fields = ContactFields {
            formatted_name: "X".into(),
            ..ContactFields::default()
        };
        let first = serialize(&fields, SerializeOptions::default());
        let second = serialize(&fields, SerializeOptions::default());

        let uid = |doc: &str| {
            doc.split("\r\n")
                .find(|l| l.starts_with("UID:"))
                .map(str::to_string)
        };
        assert_ne!(uid(&first), uid(&second));

        let rev = first
            .split("\r\n")
            .find_map(|l| l.strip_prefix("REV:"))
            .unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(rev, REV_FORMAT).is_ok());
    }
}
