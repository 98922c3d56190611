/// vCard wire format constants shared across crates
pub const VCARD_COMPONENT: &str = "VCARD";
pub const BEGIN_VCARD: &str = const_str::concat!("BEGIN:", VCARD_COMPONENT);
pub const END_VCARD: &str = const_str::concat!("END:", VCARD_COMPONENT);

pub const VCARD_VERSION: &str = "3.0";
pub const VERSION_LINE: &str = const_str::concat!("VERSION:", VCARD_VERSION);

/// Line terminator used on emission. Parsing tolerates `\n` and `\r` too.
pub const LINE_ENDING: &str = "\r\n";

pub const VCARD_EXTENSION: &str = "vcf";
pub const DEFAULT_CONFIG_FILE: &str = const_str::concat!("vcfkit", ".toml");
