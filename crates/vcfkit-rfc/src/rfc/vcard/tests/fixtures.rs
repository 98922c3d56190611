//! Sample documents shared by the vCard tests.

/// Two minimal 3.0 cards.
pub const TWO_CARDS: &str = "\
BEGIN:VCARD\r
VERSION:3.0\r
FN:Alice Example\r
N:Example;Alice;;;\r
END:VCARD\r
BEGIN:VCARD\r
VERSION:3.0\r
FN:Bob Sample\r
N:Sample;Bob;;;\r
END:VCARD\r
";

/// A legacy 2.1 card as exported by older phones: bare TYPE tokens,
/// quoted-printable values with a soft break, `\n` line endings.
pub const LEGACY_21: &str = "\
BEGIN:VCARD
VERSION:2.1
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:M=C3=BCller;J=C3=BCrgen;;;
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:J=C3=BCrgen M=C3=BC=
ller
TEL;CELL;PREF:+49 170 1234567
TEL;HOME;VOICE:030 123456
EMAIL;INTERNET:juergen@example.de
NOTE;ENCODING=QUOTED-PRINTABLE;CHARSET=ISO-8859-1:Gr=FC=DFe
END:VCARD
";

/// An address book export with grouped properties and labels.
pub const GROUPED_EXPORT: &str = "\
BEGIN:VCARD\r
VERSION:3.0\r
PRODID:-//Apple Inc.//macOS 14.0//EN\r
N:Appleseed;Johnny;;;\r
FN:Johnny Appleseed\r
ORG:Apple Inc.;Engineering\r
item1.EMAIL;type=INTERNET;type=HOME;type=pref:johnny@example.com\r
item1.X-ABLabel:_$!<Home>!$_\r
item2.EMAIL;type=INTERNET;type=WORK:jappleseed@example.com\r
TEL;type=WORK;type=VOICE:(408) 555-0100\r
TEL;type=CELL;type=VOICE:(408) 555-0101\r
item3.ADR;type=WORK;type=pref:;;1 Infinite Loop;Cupertino;CA;95014;United States\r
item3.X-ABADR:us\r
END:VCARD\r
";

/// A 4.0 card with a long folded note.
pub const FOLDED_40: &str = "\
BEGIN:VCARD\r
VERSION:4.0\r
FN:Folded Person\r
NOTE:This note is long enough that the exporting application decided to fo\r
 ld it across several physical lines\\, with an escaped comma.\r
END:VCARD\r
";
