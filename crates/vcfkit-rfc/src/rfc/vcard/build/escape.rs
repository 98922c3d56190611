//! vCard value escaping.

/// Escapes a text value: backslash, comma, semicolon and newlines.
///
/// `\r\n` and bare `\r` are emitted as a single `\n` escape.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }

    result
}

/// Prepares a parameter value for emission.
///
/// Values containing `:`, `;` or `,` are wrapped in double quotes. Double
/// quotes and line breaks cannot be represented and are dropped.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '"' | '\r' | '\n'))
        .collect();

    if cleaned.contains([':', ';', ',']) {
        format!("\"{cleaned}\"")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
    }

    #[test]
    fn escapes_every_newline_style() {
        assert_eq!(escape_text("one\ntwo\r\nthree\rfour"), "one\\ntwo\\nthree\\nfour");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_text("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn param_value_quoting() {
        assert_eq!(escape_param_value("CELL"), "CELL");
        assert_eq!(escape_param_value("work,voice"), "\"work,voice\"");
        assert_eq!(escape_param_value("say \"hi\""), "say hi");
    }
}
