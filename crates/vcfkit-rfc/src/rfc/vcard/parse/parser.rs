//! vCard document parser.
//!
//! Parses documents into [`Contact`] records. Parsing is lenient and never
//! fails: malformed lines, lines outside a card, stray `END:VCARD` lines and
//! unterminated cards are skipped.

use vcfkit_core::constants::{BEGIN_VCARD, END_VCARD};

use super::decode::decode_value;
use super::lexer::{ContentLine, parse_content_line, split_lines};
use super::values::{split_structured, structured_component, unescape_text};
use crate::rfc::vcard::core::{Contact, PropertyValue, StructuredName, names};

/// Parses a vCard document into contacts, in document order.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse(input: &str) -> Vec<Contact> {
    let lines = split_lines(input);
    tracing::trace!(count = lines.len(), "Split logical lines");

    let mut builder = ContactBuilder::new();
    for (index, line) in lines.iter().enumerate() {
        builder.push_line(line, index + 1);
    }

    let contacts = builder.finish();
    tracing::debug!(count = contacts.len(), "vCard document parsed");
    contacts
}

/// Accumulates logical lines into contacts.
///
/// `BEGIN:VCARD` opens a card, `END:VCARD` closes it. Only closed cards are
/// returned by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct ContactBuilder {
    current: Option<Contact>,
    finished: Vec<Contact>,
}

impl ContactBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one logical (already unfolded) line. `line_num` is only used
    /// for diagnostics.
    pub fn push_line(&mut self, line: &str, line_num: usize) {
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case(BEGIN_VCARD) {
            if self.current.is_some() {
                tracing::debug!(line_num, "BEGIN:VCARD inside an open card, discarding it");
            }
            self.current = Some(Contact::new());
            return;
        }

        if trimmed.eq_ignore_ascii_case(END_VCARD) {
            match self.current.take() {
                Some(contact) => self.finished.push(contact),
                None => tracing::debug!(line_num, "Ignoring END:VCARD without an open card"),
            }
            return;
        }

        let Some(contact) = self.current.as_mut() else {
            tracing::trace!(line_num, "Ignoring line outside of a card");
            return;
        };

        match parse_content_line(line) {
            Some(content_line) => apply_property(contact, content_line),
            None => tracing::debug!(line_num, "Skipping malformed content line"),
        }
    }

    /// Returns every closed card. An unterminated card is discarded.
    #[must_use]
    pub fn finish(self) -> Vec<Contact> {
        if self.current.is_some() {
            tracing::debug!("Discarding unterminated card at end of input");
        }
        self.finished
    }
}

/// Merges one property into the contact.
fn apply_property(contact: &mut Contact, line: ContentLine) {
    let value = decode_value(&line.value, &line.params);

    match line.name.as_str() {
        names::FN => contact.formatted_name = Some(unescape_text(&value)),
        names::N => contact.n = Some(StructuredName::from_value(&value)),
        names::ORG => {
            let parts = split_structured(&value);
            contact.org = Some(structured_component(&parts, 0));
        }
        names::TEL => contact.tel.push(property_value(value, line)),
        names::EMAIL => contact.email.push(property_value(value, line)),
        names::ADR => contact.adr.push(property_value(value, line)),
        _ => {
            let name = line.name.clone();
            contact.insert_other(&name, property_value(value, line));
        }
    }
}

fn property_value(value: String, line: ContentLine) -> PropertyValue {
    PropertyValue {
        value,
        params: line.params,
        group: line.group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{OtherValue, ParamValue};

    fn single(input: &str) -> Contact {
        let mut contacts = parse(input);
        assert_eq!(contacts.len(), 1, "expected exactly one contact");
        contacts.remove(0)
    }

    #[test]
    fn parses_two_cards_in_order() {
        let contacts =
            parse("BEGIN:VCARD\nFN:A\nEND:VCARD\nBEGIN:VCARD\nFN:B\nEND:VCARD\n");
        let names: Vec<_> = contacts
            .iter()
            .map(|c| c.formatted_name.as_deref())
            .collect();
        assert_eq!(names, [Some("A"), Some("B")]);
    }

    #[test]
    fn empty_input_yields_no_contacts() {
        assert!(parse("").is_empty());
        assert!(parse("\r\n\r\n").is_empty());
    }

    #[test_log::test]
    fn unterminated_card_is_discarded() {
        assert!(parse("BEGIN:VCARD\nFN:Ghost\n").is_empty());
    }

    #[test_log::test]
    fn stray_end_is_ignored() {
        let contacts = parse("END:VCARD\nBEGIN:VCARD\nFN:Real\nEND:VCARD\nEND:VCARD\n");
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].formatted_name.as_deref(), Some("Real"));
    }

    #[test]
    fn lines_outside_cards_are_ignored() {
        let contact = single("FN:Outside\nBEGIN:VCARD\nFN:Inside\nEND:VCARD\nEMAIL:x@y.z\n");
        assert_eq!(contact.formatted_name.as_deref(), Some("Inside"));
        assert!(contact.email.is_empty());
    }

    #[test]
    fn begin_inside_open_card_restarts() {
        let contact = single("BEGIN:VCARD\nFN:Lost\nBEGIN:VCARD\nFN:Kept\nEND:VCARD\n");
        assert_eq!(contact.formatted_name.as_deref(), Some("Kept"));
    }

    #[test]
    fn delimiters_are_case_insensitive() {
        let contact = single("begin:vcard\r\nfn:lower\r\nEnd:VCard\r\n");
        assert_eq!(contact.formatted_name.as_deref(), Some("lower"));
    }

    #[test_log::test]
    fn malformed_lines_are_skipped() {
        let contact = single("BEGIN:VCARD\nnot a property\nFN:Still Here\nEND:VCARD\n");
        assert_eq!(contact.formatted_name.as_deref(), Some("Still Here"));
        assert!(contact.other.is_empty());
    }

    #[test]
    fn repeated_fn_last_write_wins() {
        let contact = single("BEGIN:VCARD\nFN:First\nFN:Second\nEND:VCARD\n");
        assert_eq!(contact.formatted_name.as_deref(), Some("Second"));
    }

    #[test]
    fn fn_is_unescaped() {
        let contact = single("BEGIN:VCARD\nFN:Doe\\, Jane\nEND:VCARD\n");
        assert_eq!(contact.formatted_name.as_deref(), Some("Doe, Jane"));
    }

    #[test]
    fn structured_name_components() {
        let contact = single("BEGIN:VCARD\nN:Doe;Jane;;Dr.\nEND:VCARD\n");
        let n = contact.n.unwrap();
        assert_eq!(n.family, "Doe");
        assert_eq!(n.given, "Jane");
        assert_eq!(n.middle, "");
        assert_eq!(n.prefix, "Dr.");
        assert_eq!(n.suffix, "");
    }

    #[test]
    fn org_keeps_first_segment_and_later_lines_overwrite() {
        let contact = single("BEGIN:VCARD\nORG:Acme;Sales\nORG:Globex;R&D;Lab\nEND:VCARD\n");
        assert_eq!(contact.org.as_deref(), Some("Globex"));
    }

    #[test]
    fn multi_valued_properties_keep_document_order() {
        let contact = single(
            "BEGIN:VCARD\n\
             TEL;TYPE=WORK:111\n\
             EMAIL:a@example.com\n\
             TEL;TYPE=CELL:222\n\
             ADR;TYPE=HOME:;;1 Main St;Town;;12345;US\n\
             EMAIL:b@example.com\n\
             END:VCARD\n",
        );

        let tels: Vec<_> = contact.tel.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(tels, ["111", "222"]);
        let emails: Vec<_> = contact.email.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(emails, ["a@example.com", "b@example.com"]);
        assert_eq!(contact.adr[0].value, ";;1 Main St;Town;;12345;US");
        assert!(contact.adr[0].has_type("home"));
    }

    #[test]
    fn type_dedup_on_tel() {
        let contact =
            single("BEGIN:VCARD\nTEL;TYPE=HOME,VOICE;TYPE=HOME:+12125551234\nEND:VCARD\n");
        assert_eq!(
            contact.tel[0].params.get("TYPE"),
            Some(&ParamValue::Types(vec!["HOME".into(), "VOICE".into()]))
        );
    }

    #[test]
    fn other_properties_promote_to_sequence() {
        let contact = single("BEGIN:VCARD\nX-CUSTOM:a\nX-CUSTOM:b\nEND:VCARD\n");
        assert_eq!(
            contact.other("X-CUSTOM"),
            Some(&OtherValue::Multiple(vec![
                PropertyValue::new("a"),
                PropertyValue::new("b"),
            ]))
        );
    }

    #[test]
    fn version_lands_in_other() {
        let contact = single("BEGIN:VCARD\nVERSION:3.0\nFN:x\nEND:VCARD\n");
        assert_eq!(
            contact.other("VERSION"),
            Some(&OtherValue::Single(PropertyValue::new("3.0")))
        );
    }

    #[test]
    fn grouped_properties_are_dispatched_by_name() {
        let contact = single(
            "BEGIN:VCARD\n\
             item1.EMAIL;type=INTERNET:g@example.com\n\
             item1.X-ABLabel:Home\n\
             END:VCARD\n",
        );
        assert_eq!(contact.email.len(), 1);
        assert_eq!(contact.email[0].group.as_deref(), Some("item1"));
        assert!(contact.other("X-ABLABEL").is_some());
    }

    #[test]
    fn quoted_printable_note_is_decoded() {
        let contact = single(
            "BEGIN:VCARD\nNOTE;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:F=C3=BCr\nEND:VCARD\n",
        );
        let note = contact.other("NOTE").and_then(OtherValue::first).unwrap();
        assert_eq!(note.value, "Für");
    }

    #[test]
    fn quoted_printable_soft_break_across_lines() {
        let contact = single(
            "BEGIN:VCARD\r\n\
             FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:J=C3=BCrgen M=C3=BC=\r\n\
             ller\r\n\
             END:VCARD\r\n",
        );
        assert_eq!(contact.formatted_name.as_deref(), Some("Jürgen Müller"));
    }

    #[test]
    fn quoted_printable_tel_is_decoded() {
        let contact =
            single("BEGIN:VCARD\nTEL;ENCODING=QUOTED-PRINTABLE:=2B1 555 0100\nEND:VCARD\n");
        assert_eq!(contact.tel[0].value, "+1 555 0100");
    }
}
