//! vCard line folding.

use vcfkit_core::constants::LINE_ENDING;

/// Maximum line length in octets (not characters).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to at most 75 octets per physical line.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Folds only at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str(LINE_ENDING);
            result.push(' ');
            current_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}
