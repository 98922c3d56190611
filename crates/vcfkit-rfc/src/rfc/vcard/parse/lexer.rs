//! vCard lexer: line unfolding and content line tokenizing.

use crate::rfc::vcard::core::{ParameterMap, QUOTED_PRINTABLE, param_names};

/// Normalizes `\r\n` and bare `\r` line breaks to `\n`.
#[must_use]
pub fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits a document into logical lines.
///
/// A physical line starting with a single space or tab continues the
/// previous line with that one character removed. A quoted-printable line
/// ending in `=` is a soft break: the `=` is dropped and the next physical
/// line is appended as is. Blank logical lines are dropped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let normalized = normalize_line_endings(input);
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for physical in normalized.split('\n') {
        if let Some(line) = current.as_mut() {
            if ends_with_soft_break(line) {
                line.pop();
                line.push_str(physical);
                continue;
            }

            if let Some(continuation) = physical.strip_prefix([' ', '\t']) {
                line.push_str(continuation);
                continue;
            }
        }

        if let Some(finished) = current.replace(physical.to_string()) {
            push_logical(&mut lines, finished);
        }
    }

    if let Some(finished) = current {
        push_logical(&mut lines, finished);
    }

    lines
}

fn push_logical(lines: &mut Vec<String>, line: String) {
    if !line.trim().is_empty() {
        lines.push(line);
    }
}

fn ends_with_soft_break(line: &str) -> bool {
    line.ends_with('=')
        && find_value_separator(line).is_some_and(|pos| declares_quoted_printable(&line[..pos]))
}

/// Returns whether the name/parameter part of a line carries
/// `ENCODING=QUOTED-PRINTABLE`.
fn declares_quoted_printable(key: &str) -> bool {
    split_key(key).into_iter().skip(1).any(|segment| {
        segment.split_once('=').is_some_and(|(name, value)| {
            name.trim().eq_ignore_ascii_case(param_names::ENCODING)
                && unquote(value.trim()).eq_ignore_ascii_case(QUOTED_PRINTABLE)
        })
    })
}

/// A tokenized content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: ParameterMap,
    /// Raw value string.
    pub value: String,
}

/// Tokenizes a logical line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// Returns `None` for lines without a `:` separator or with an empty name.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let colon_pos = find_value_separator(line)?;
    let (key, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let mut segments = split_key(key).into_iter();
    let (group, name) = parse_group(segments.next()?.trim());
    if name.is_empty() {
        return None;
    }

    let mut params = ParameterMap::new();
    for segment in segments {
        apply_parameter(&mut params, segment);
    }

    Some(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Colons inside quoted parameter values are skipped. If the quotes never
/// balance, the first colon is used.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    line.find(':')
}

/// Splits the name/params part on semicolons outside quotes.
fn split_key(key: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in key.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&key[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    segments.push(&key[start..]);
    segments
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some((group, name)) = s.split_once('.')
        && !group.is_empty()
        && !name.is_empty()
        && group.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return (Some(group), name);
    }
    (None, s)
}

/// Applies one `name=value` or bare-token parameter segment.
fn apply_parameter(params: &mut ParameterMap, segment: &str) {
    let segment = segment.trim();
    if segment.is_empty() {
        return;
    }

    match segment.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            params.set(name, unquote(value.trim()));
        }
        Some(_) => {
            tracing::debug!(segment, "Ignoring parameter without a name");
        }
        // Legacy vCard 2.1 bare token, e.g. TEL;CELL
        None => params.add_type(segment),
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
