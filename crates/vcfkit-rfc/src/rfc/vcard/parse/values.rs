//! vCard text value helpers.

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash).
/// Unknown escapes are kept verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(&(escaped @ (',' | ';' | '\\'))) => {
                chars.next();
                result.push(escaped);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Components keep their escapes; pass each through [`unescape_text`] to
/// get display text.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Returns the `index`-th structured component, unescaped, or an empty
/// string when the value has fewer components.
#[must_use]
pub fn structured_component(parts: &[&str], index: usize) -> String {
    parts
        .get(index)
        .map(|part| unescape_text(part))
        .unwrap_or_default()
}
