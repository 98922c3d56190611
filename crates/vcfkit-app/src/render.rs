//! Text and JSON views of parsed contacts.

use serde::Serialize;
use vcfkit_rfc::rfc::vcard::core::names;
use vcfkit_rfc::rfc::vcard::{Address, Contact, PropertyValue};

use crate::context::AppContext;
use crate::error::AppResult;

const UNNAMED: &str = "(unnamed)";

/// One line of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub index: usize,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub org: Option<String>,
}

impl ContactRow {
    #[must_use]
    pub fn new(index: usize, contact: &Contact, ctx: &AppContext) -> Self {
        Self {
            index,
            name: contact
                .display_name()
                .unwrap_or_else(|| UNNAMED.to_string()),
            phone: contact
                .primary_phone()
                .map(|tel| ctx.phone.format(&tel.value))
                .filter(|phone| !phone.is_empty()),
            email: contact.primary_email().map(|email| email.value.clone()),
            org: contact.org.clone().filter(|org| !org.is_empty()),
        }
    }
}

/// Builds 1-based rows for every contact.
#[must_use]
pub fn rows(contacts: &[Contact], ctx: &AppContext) -> Vec<ContactRow> {
    contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| ContactRow::new(i + 1, contact, ctx))
        .collect()
}

/// Renders rows as a left-aligned table with a header line.
#[must_use]
pub fn table(rows: &[ContactRow]) -> String {
    const HEADERS: [&str; 5] = ["#", "NAME", "PHONE", "EMAIL", "ORG"];

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.index.to_string(),
                row.name.clone(),
                row.phone.clone().unwrap_or_default(),
                row.email.clone().unwrap_or_default(),
                row.org.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Renders `list` output.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn list(contacts: &[Contact], ctx: &AppContext, json: bool) -> AppResult<String> {
    let rows = rows(contacts, ctx);
    if json {
        let mut out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(table(&rows))
    }
}

/// Renders `show` output for one contact.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn show(contact: &Contact, ctx: &AppContext, json: bool) -> AppResult<String> {
    if json {
        let mut out = serde_json::to_string_pretty(contact)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(detail(contact, ctx))
    }
}

/// Multi-line text view of every property of a contact.
#[must_use]
pub fn detail(contact: &Contact, ctx: &AppContext) -> String {
    let mut out = String::new();
    out.push_str(contact.display_name().as_deref().unwrap_or(UNNAMED));
    out.push('\n');

    if let Some(formatted) = &contact.formatted_name {
        push_line(&mut out, names::FN, formatted, "");
    }
    if let Some(n) = contact.n.as_ref().filter(|n| !n.is_empty()) {
        push_line(&mut out, names::N, &n.components().join(";"), "");
    }
    if let Some(org) = &contact.org {
        push_line(&mut out, names::ORG, org, "");
    }

    for tel in &contact.tel {
        push_property(&mut out, names::TEL, &ctx.phone.format(&tel.value), tel);
    }
    for email in &contact.email {
        push_property(&mut out, names::EMAIL, &email.value, email);
    }
    for adr in &contact.adr {
        push_property(&mut out, names::ADR, &Address::from_value(&adr.value).one_line(), adr);
    }

    for (name, values) in &contact.other {
        for value in values.as_slice() {
            push_property(&mut out, name, &value.text(), value);
        }
    }

    out
}

fn push_property(out: &mut String, name: &str, shown: &str, property: &PropertyValue) {
    let label = match &property.group {
        Some(group) => format!("{group}.{name}"),
        None => name.to_string(),
    };

    let params = property
        .params
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(single) => format!("{key}={single}"),
            None => format!("{key}={}", value.types().join(",")),
        })
        .collect::<Vec<_>>()
        .join("; ");

    push_line(out, &label, shown, &params);
}

fn push_line(out: &mut String, label: &str, shown: &str, params: &str) {
    out.push_str(&format!("  {label:<8} {shown}"));
    if !params.is_empty() {
        out.push_str(&format!("  ({params})"));
    }
    out.push('\n');
}
